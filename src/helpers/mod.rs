pub mod config_helper;
pub mod cookie_helper;
pub mod format_helper;
pub mod timestamp_helper;
