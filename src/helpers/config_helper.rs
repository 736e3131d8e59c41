use crate::config::constants::{
    DEFAULT_API_PATH, DEFAULT_BASE_URL, DEFAULT_DATE_FORMAT, DEFAULT_LOGIN_PATH, DEFAULT_TIME_FORMAT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_api_path() -> String {
        DEFAULT_API_PATH.to_string()
    }

    pub fn default_login_path() -> String {
        DEFAULT_LOGIN_PATH.to_string()
    }

    pub fn default_date_format() -> String {
        DEFAULT_DATE_FORMAT.to_string()
    }

    pub fn default_time_format() -> String {
        DEFAULT_TIME_FORMAT.to_string()
    }

    pub fn default_show_ids() -> bool {
        true
    }
}
