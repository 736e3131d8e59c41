#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItemView {
    pub id: i64,
    pub topic: Option<String>,
    pub reviewer: String,
    pub submitted: String,
    pub rating: String,
    pub mentor: String,
    pub comments: String,
    /// Delete control shown for this item.
    pub deletable: bool,
}

impl FeedbackItemView {
    pub fn byline(&self) -> String {
        format!("Reviewed by {} • {}", self.reviewer, self.submitted)
    }
}
