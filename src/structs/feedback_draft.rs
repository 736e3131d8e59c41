/// Raw field values typed by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub reviewer_name: Option<String>,
    pub topic: String,
    pub mentor: String,
    pub rating: String,
    pub comments: String,
}
