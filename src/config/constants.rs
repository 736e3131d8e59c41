use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "feedbackhub";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_PATH: &str = "/api";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DATE_FORMAT: &str = "%x";
pub const DEFAULT_TIME_FORMAT: &str = "%X";
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

pub const SESSION_COOKIE_NAME: &str = "sessionid";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

pub const MENTOR_PLACEHOLDER: &str = "Select a mentor";
pub const FILTER_PLACEHOLDER: &str = "All Mentors";
pub const NO_MENTORS_OPTION: &str = "No mentors available";
pub const MENTOR_ERROR_OPTION: &str = "Error loading mentors";

pub const SUBMIT_LABEL: &str = "Submit Feedback";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Feedback submitted successfully!";
pub const CONNECTION_FALLBACK_MESSAGE: &str = "Failed to connect to server. Make sure the backend is running!";

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this feedback?";
pub const DELETE_FAILED_PREFIX: &str = "Failed to delete feedback: ";
pub const LOGOUT_CONFIRM_PROMPT: &str = "Are you sure you want to logout?";

pub const LOADING_FEEDBACK: &str = "Loading feedback...";
pub const LOADING_CLASSES: &str = "Loading classes...";
pub const NO_FEEDBACK_YET: &str = "No feedback submitted yet";
pub const NO_CLASSES_FOUND: &str = "No classes found";
pub const FEEDBACK_LOAD_FAILED: &str = "Failed to load feedback. Make sure the backend is running!";
pub const CLASSES_LOAD_FAILED: &str = "Failed to load classes. Make sure the backend is running!";
pub const NOT_AVAILABLE: &str = "N/A";

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 10;

pub const MESSAGE_LIFETIME_SECS: u64 = 5;

pub fn message_lifetime() -> Duration {
    Duration::from_secs(MESSAGE_LIFETIME_SECS)
}
