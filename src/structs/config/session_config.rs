use serde::{Deserialize, Serialize};

/// Cookies seeded into the client's jar before the first request, so one-shot
/// commands can reuse a session obtained elsewhere.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}
