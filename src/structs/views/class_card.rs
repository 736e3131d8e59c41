#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCard {
    pub title: String,
    pub description: String,
    pub mentor: String,
    pub students: u32,
    pub avg_rating: String,
    pub feedback_count: u32,
}
