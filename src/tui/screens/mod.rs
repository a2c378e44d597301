//! TUI screen implementations.

pub mod depo_form;
pub mod help;

pub use depo_form::{DepoFormState, Focus, draw_depo_form};
pub use help::{HelpState, draw_help};
