//! Reusable TUI widgets.

pub mod checklist;
pub mod notification_bar;
pub mod text_input;
pub mod unit_picker;
pub mod upload_card;

pub use checklist::{checklist_items, draw_checklist};
pub use notification_bar::{NotificationBar, draw_notification_bar};
pub use text_input::{InputRules, draw_text_input};
pub use unit_picker::{UnitPicker, draw_unit_picker};
pub use upload_card::draw_upload_card;
