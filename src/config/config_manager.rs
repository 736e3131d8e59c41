use std::fs;
use std::path::{Path, PathBuf};
use chrono::format::{Item, StrftimeItems};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{FeedbackHubError, FeedbackHubResult};
use crate::helpers::format_helper::locale_from_name;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# FeedbackHub client configuration

[server]
# Where the FeedbackHub backend is served
base_url = "http://localhost:8000"

# Prefix of the REST endpoints
api_path = "/api"

# Page the client is sent to when the session is not authenticated
login_path = "/login"

[session]
# Cookies copied from a logged-in browser session. Leave commented out and use
# `feedbackhub shell` + `login` to obtain a fresh session instead.
# session_id = "..."
# csrf_token = "..."

[display]
# strftime patterns for the date and time halves of a timestamp
date_format = "%x"
time_format = "%X"

# Locale for %x/%X and names of months and weekdays. Defaults to LC_ALL,
# LC_TIME or LANG from the environment.
# locale = "en_US"

# Show record ids next to feedback entries (needed for `delete <id>`)
show_ids = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration. An explicit path must exist; the default
    /// location falls back to built-in defaults when absent.
    pub fn load(path: Option<&Path>) -> FeedbackHubResult<Config> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FeedbackHubError::config_error(
                        &format!("config file not found: {}", path.display()),
                        Some("Run 'feedbackhub init' to create one"),
                    ));
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> FeedbackHubResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> FeedbackHubResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                FeedbackHubError::config_error("could not determine home directory", Some("Pass --config <path>"))
            })?,
        };

        if config_file_path.exists() {
            return Err(FeedbackHubError::config_error(
                &format!("config file already exists: {}", config_file_path.display()),
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.server.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("server.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("server.base_url is not a valid URL ({}): {}", config.server.base_url, e)),
        }

        for (field, value) in [("server.api_path", &config.server.api_path), ("server.login_path", &config.server.login_path)] {
            if !value.starts_with('/') {
                errors.push(format!("{} must start with '/': {}", field, value));
            }
        }

        for (field, value) in [("display.date_format", &config.display.date_format), ("display.time_format", &config.display.time_format)] {
            if !Self::is_valid_pattern(value) {
                errors.push(format!("{} is not a valid strftime pattern: '{}'", field, value));
            }
        }

        if let Some(locale) = config.display.locale.as_deref() {
            if locale_from_name(locale).is_none() {
                errors.push(format!("display.locale is not a known locale: '{}'", locale));
            }
        }

        if config.session.csrf_token.as_deref().is_some_and(str::is_empty) {
            errors.push("session.csrf_token is set but empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid_pattern(pattern: &str) -> bool {
        !pattern.trim().is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_explicit_file_and_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbase_url = \"http://feedback.example:9000\"\n\n[session]\ncsrf_token = \"abc\"").unwrap();

        let config = ConfigManager::load(Some(file.path())).unwrap();

        assert_eq!(config.server.base_url, "http://feedback.example:9000");
        assert_eq!(config.server.api_path, "/api");
        assert_eq!(config.session.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.session.session_id, None);
        assert_eq!(config.display.date_format, "%x");
    }

    #[test]
    fn load_rejects_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigManager::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(FeedbackHubError::ConfigurationError { .. })));
    }

    #[test]
    fn sample_config_round_trips_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::create_sample_config(Some(&path)).unwrap();
        let config = ConfigManager::load(Some(&path)).unwrap();

        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
    }

    #[test]
    fn validate_reports_every_problem() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.com".to_string();
        config.server.api_path = "api".to_string();
        config.display.time_format = "%Q".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("http or https"));
        assert!(errors[1].contains("server.api_path"));
        assert!(errors[2].contains("display.time_format"));
    }

    #[test]
    fn validate_rejects_unknown_locale() {
        let mut config = Config::default();
        config.display.locale = Some("de_DE.UTF-8".to_string());
        assert!(ConfigManager::validate_config(&config).is_ok());

        config.display.locale = Some("xx_YY".to_string());
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors, vec!["display.locale is not a known locale: 'xx_YY'".to_string()]);
    }
}
