use serde::{Deserialize, Serialize};

/// Body of `POST /feedback/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFeedback {
    pub reviewer_name: String,
    pub peer_name: String,
    pub mentor: String,
    pub rating: i32,
    pub comments: String,
}
