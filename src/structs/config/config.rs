use serde::{Deserialize, Serialize};
use crate::structs::config::display_config::DisplayConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::session_config::SessionConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}
