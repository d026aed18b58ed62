pub mod config_helper;
pub mod display;
pub mod money;
pub mod status_badge;
