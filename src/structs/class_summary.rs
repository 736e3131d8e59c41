use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub class_name: String,
    #[serde(default)]
    pub description: String,
    pub mentor: String,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub feedback_count: u32,
}
