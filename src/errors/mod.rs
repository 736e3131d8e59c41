use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackHubError {
    // Transport errors (the request never produced a response)
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // HTTP-level errors (non-2xx status)
    #[error("Server error: {status} - {body}")]
    HttpStatusError {
        operation: String,
        status: u16,
        body: String,
    },

    // Response body did not have the expected shape
    #[error("Invalid response from {operation}: {reason}")]
    ParseError {
        operation: String,
        reason: String,
    },

    // Backend answered but reported `success: false`
    #[error("Could not {operation}: {message}")]
    ApplicationError {
        operation: String,
        message: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },

    #[error("I/O error during {operation}: {reason}")]
    IoError {
        operation: String,
        reason: String,
    },

    // User input errors
    #[error("Invalid input '{input}': expected {expected}")]
    UserInputError {
        input: String,
        expected: String,
    },
}

impl FeedbackHubError {
    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn http_status_error(operation: &str, status: u16, body: &str) -> Self {
        Self::HttpStatusError {
            operation: operation.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn parse_error(operation: &str, reason: &str) -> Self {
        Self::ParseError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn application_error(operation: &str, message: &str) -> Self {
        Self::ApplicationError {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn user_input_error(input: &str, expected: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Status code for HTTP-level failures, `None` for everything else.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::HttpStatusError { status, .. } => *status >= 500,
            Self::UserInputError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ParseError { .. } => false,
            Self::ApplicationError { .. } => false,
            Self::IoError { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { url, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Make sure the backend is running and reachable");
                msg
            }
            Self::ConfigurationError { message, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::HttpStatusError { status: 401 | 403, .. } => {
                format!("{}\n💡 Your session may have expired, log in again", self)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations
pub type FeedbackHubResult<T> = Result<T, FeedbackHubError>;

impl From<std::io::Error> for FeedbackHubError {
    fn from(error: std::io::Error) -> Self {
        FeedbackHubError::IoError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for FeedbackHubError {
    fn from(error: serde_json::Error) -> Self {
        FeedbackHubError::ParseError {
            operation: "JSON decoding".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for FeedbackHubError {
    fn from(error: toml::de::Error) -> Self {
        FeedbackHubError::ConfigurationError {
            message: error.message().to_string(),
            suggestion: Some("Check the syntax of your config.toml".to_string()),
        }
    }
}

impl From<reqwest::Error> for FeedbackHubError {
    fn from(error: reqwest::Error) -> Self {
        FeedbackHubError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_carries_code_and_body() {
        let error = FeedbackHubError::http_status_error("create feedback", 400, "{\"rating\":[\"invalid\"]}");
        assert_eq!(error.to_string(), "Server error: 400 - {\"rating\":[\"invalid\"]}");
        assert_eq!(error.status_code(), Some(400));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn network_errors_are_recoverable() {
        let error = FeedbackHubError::network_error("load stats", Some("http://localhost:8000/api/stats"), "connection refused");
        assert!(error.is_recoverable());
        assert!(error.user_message().contains("http://localhost:8000/api/stats"));
    }

    #[test]
    fn toml_errors_become_configuration_errors() {
        let error: FeedbackHubError = toml::from_str::<toml::Value>("server = [").unwrap_err().into();
        assert!(matches!(error, FeedbackHubError::ConfigurationError { .. }));
    }
}
