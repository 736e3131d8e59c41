use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_feedback: u64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub active_mentors: u64,
}
