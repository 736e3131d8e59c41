pub mod confirmer;
pub mod feedback_api;
