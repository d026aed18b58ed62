pub mod api_config;
pub mod config;
pub mod output_config;
pub mod session_config;
