use crate::config::constants::{
    CONNECTION_FALLBACK_MESSAGE, DELETE_CONFIRM_PROMPT, DELETE_FAILED_PREFIX, RATING_MAX, RATING_MIN,
    SUBMIT_SUCCESS_MESSAGE,
};
use crate::enums::delete_outcome::DeleteOutcome;
use crate::enums::message_kind::MessageKind;
use crate::enums::refresh_task::RefreshTask;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::enums::validation_error::ValidationError;
use crate::errors::FeedbackHubError;
use crate::services::effect_runner::EffectRunner;
use crate::structs::app_context::AppContext;
use crate::structs::new_feedback::NewFeedback;
use crate::structs::session::Session;
use crate::structs::views::feedback_form::FeedbackForm;
use crate::structs::views::page_state::PageState;
use crate::traits::confirmer::Confirmer;
use crate::traits::feedback_api::FeedbackApi;

pub struct FeedbackMutator;

impl FeedbackMutator {

    /// Checks the form field by field and stops at the first problem. The
    /// session username, when known, wins over the typed reviewer name.
    pub fn validate(form: &FeedbackForm, session: &Session) -> Result<NewFeedback, ValidationError> {
        let reviewer_name = match session.username() {
            Some(username) => username.to_string(),
            None => form.reviewer_name.trim().to_string(),
        };
        if reviewer_name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let topic = form.topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }

        let mentor = form.mentor.selected().ok_or(ValidationError::MissingMentor)?;

        let rating = Self::parse_rating(&form.rating).ok_or(ValidationError::InvalidRating)?;

        let comments = form.comments.trim();
        if comments.is_empty() {
            return Err(ValidationError::MissingComments);
        }

        Ok(NewFeedback {
            reviewer_name,
            peer_name: topic.to_string(),
            mentor: mentor.to_string(),
            rating,
            comments: comments.to_string(),
        })
    }

    pub fn parse_rating(raw: &str) -> Option<i32> {
        raw.trim()
            .parse::<i32>()
            .ok()
            .filter(|rating| (RATING_MIN..=RATING_MAX).contains(rating))
    }

    pub async fn submit<A: FeedbackApi + ?Sized>(ctx: &AppContext<'_, A>, page: &mut PageState) -> SubmitOutcome {
        let feedback = match Self::validate(&page.form, ctx.session) {
            Ok(feedback) => feedback,
            Err(e) => {
                page.form.show_message(MessageKind::Error, &e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        page.form.submit.begin();
        log::info!("📨 Submitting feedback on '{}' for {}", feedback.peer_name, feedback.mentor);
        log::debug!("Submitting feedback: {:?}", feedback);

        let outcome = Self::send_feedback(ctx, page, &feedback).await;

        page.form.submit.finish();
        outcome
    }

    async fn send_feedback<A: FeedbackApi + ?Sized>(
        ctx: &AppContext<'_, A>,
        page: &mut PageState,
        feedback: &NewFeedback,
    ) -> SubmitOutcome {
        let result = match ctx.api.create_feedback(feedback).await {
            Ok(result) => result,
            Err(e) => {
                let message = Self::failure_text(&e);
                log::error!("❌ Error: {}", e);
                page.form.show_message(MessageKind::Error, &message);
                return SubmitOutcome::Failed(message);
            }
        };

        if !result.success {
            let message = format!("Error: {}", result.failure_message());
            log::error!("❌ Submission error: {}", result.body);
            page.form.show_message(MessageKind::Error, &message);
            return SubmitOutcome::Failed(message);
        }

        page.form.show_message(MessageKind::Success, SUBMIT_SUCCESS_MESSAGE);
        page.form.reset(ctx.session);
        log::info!("✅ {}", SUBMIT_SUCCESS_MESSAGE);

        let reports = EffectRunner::run(ctx, page, &RefreshTask::after_submit()).await;
        SubmitOutcome::Submitted(reports)
    }

    fn failure_text(error: &FeedbackHubError) -> String {
        match error {
            FeedbackHubError::NetworkError { reason, .. } if reason.trim().is_empty() => {
                CONNECTION_FALLBACK_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Deletes a record after the user confirms. There is no retry; failures
    /// become an alert.
    pub async fn delete<A: FeedbackApi + ?Sized>(
        ctx: &AppContext<'_, A>,
        page: &mut PageState,
        confirmer: &dyn Confirmer,
        id: i64,
    ) -> DeleteOutcome {
        if !confirmer.confirm(DELETE_CONFIRM_PROMPT) {
            log::info!("⏭️ Delete of feedback #{} cancelled", id);
            return DeleteOutcome::Cancelled;
        }

        let reason = match ctx.api.delete_feedback(id).await {
            Ok(result) if result.success => {
                log::info!("🗑️ Deleted feedback #{}", id);
                let reports = EffectRunner::run(ctx, page, &RefreshTask::after_delete()).await;
                return DeleteOutcome::Deleted(reports);
            }
            Ok(result) => result.error_or_unknown(),
            Err(e) => {
                log::error!("❌ Error: {}", e);
                e.to_string()
            }
        };

        let alert = format!("{}{}", DELETE_FAILED_PREFIX, reason);
        page.alert(&alert);
        DeleteOutcome::Failed(alert)
    }
}
