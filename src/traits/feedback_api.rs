use async_trait::async_trait;
use crate::errors::FeedbackHubResult;
use crate::structs::auth_status::AuthStatus;
use crate::structs::class_summary::ClassSummary;
use crate::structs::feedback_record::FeedbackRecord;
use crate::structs::login_request::LoginRequest;
use crate::structs::mutation_result::MutationResult;
use crate::structs::new_feedback::NewFeedback;
use crate::structs::stats::Stats;

/// The FeedbackHub REST surface as seen by the client. Every call goes to the
/// backend; nothing is cached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn check_auth(&self) -> FeedbackHubResult<AuthStatus>;

    async fn login(&self, request: &LoginRequest) -> FeedbackHubResult<MutationResult>;

    async fn logout(&self) -> FeedbackHubResult<()>;

    async fn mentors(&self) -> FeedbackHubResult<Vec<String>>;

    async fn stats(&self) -> FeedbackHubResult<Stats>;

    async fn classes(&self) -> FeedbackHubResult<Vec<ClassSummary>>;

    /// `mentor` narrows the list to one mentor's feedback.
    async fn feedback(&self, mentor: Option<String>) -> FeedbackHubResult<Vec<FeedbackRecord>>;

    async fn create_feedback(&self, feedback: &NewFeedback) -> FeedbackHubResult<MutationResult>;

    async fn delete_feedback(&self, id: i64) -> FeedbackHubResult<MutationResult>;
}
