use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub id: i64,
    pub reviewer_name: String,
    /// Topic of the session; the backend stores it in `peer_name`.
    #[serde(default)]
    pub peer_name: Option<String>,
    pub mentor: String,
    pub rating: i32,
    #[serde(default)]
    pub comments: String,
    #[serde(with = "crate::helpers::timestamp_helper")]
    pub date_submitted: DateTime<Utc>,
}
