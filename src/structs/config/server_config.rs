use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_api_path")]
    pub api_path: String,

    #[serde(default = "ConfigHelper::default_login_path")]
    pub login_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            api_path: ConfigHelper::default_api_path(),
            login_path: ConfigHelper::default_login_path(),
        }
    }
}
