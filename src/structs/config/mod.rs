pub mod config;
pub mod display_config;
pub mod server_config;
pub mod session_config;
