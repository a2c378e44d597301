#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod storage;
pub mod tui;
