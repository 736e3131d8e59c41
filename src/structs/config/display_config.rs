use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "ConfigHelper::default_date_format")]
    pub date_format: String,

    #[serde(default = "ConfigHelper::default_time_format")]
    pub time_format: String,

    #[serde(default = "ConfigHelper::default_show_ids")]
    pub show_ids: bool,

    /// Locale for `%x`/`%X` and month or weekday names, e.g. `de_DE`. Read from
    /// `LC_ALL`, `LC_TIME` or `LANG` when unset.
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: ConfigHelper::default_date_format(),
            time_format: ConfigHelper::default_time_format(),
            show_ids: ConfigHelper::default_show_ids(),
            locale: None,
        }
    }
}
