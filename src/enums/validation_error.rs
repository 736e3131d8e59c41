use thiserror::Error;

/// Client-side form validation failures, in the order they are checked.
/// `Display` is the inline message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a topic name")]
    MissingTopic,
    #[error("Please select a mentor")]
    MissingMentor,
    #[error("Please enter a valid rating between 1 and 10")]
    InvalidRating,
    #[error("Please enter feedback comments")]
    MissingComments,
}
