use crate::enums::delete_outcome::DeleteOutcome;
use crate::enums::guard_outcome::GuardOutcome;
use crate::enums::page::Page;
use crate::enums::refresh_task::{FeedbackScope, RefreshTask};
use crate::enums::submit_outcome::SubmitOutcome;
use crate::errors::{FeedbackHubError, FeedbackHubResult};
use crate::services::effect_runner::EffectRunner;
use crate::services::feedback_mutator::FeedbackMutator;
use crate::services::session_guard::SessionGuard;
use crate::services::view_switcher::switch_to;
use crate::structs::app_context::AppContext;
use crate::structs::config::config::Config;
use crate::structs::config::display_config::DisplayConfig;
use crate::structs::feedback_draft::FeedbackDraft;
use crate::structs::session::Session;
use crate::structs::task_report::TaskReport;
use crate::structs::views::page_state::PageState;
use crate::traits::confirmer::Confirmer;
use crate::traits::feedback_api::FeedbackApi;

/// One client session: the backend, the page on screen and who is looking at
/// it. Every operation runs to completion before the next one starts.
pub struct FeedbackApp<A: FeedbackApi> {
    api: A,
    page: PageState,
    session: Session,
    display: DisplayConfig,
    login_path: String,
}

impl<A: FeedbackApi> FeedbackApp<A> {
    pub fn new(api: A, config: &Config) -> Self {
        Self {
            api,
            page: PageState::new(),
            session: Session::anonymous(),
            display: config.display.clone(),
            login_path: config.server.login_path.clone(),
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Page load: the session check first, then the initial views. Nothing is
    /// fetched when the guard redirects. Returns whether the page loaded.
    pub async fn start(&mut self) -> bool {
        self.page = PageState::new();

        match SessionGuard::verify(&self.api, &mut self.page, &self.login_path).await {
            GuardOutcome::Redirected { to } => {
                log::warn!("🔒 Session is not authenticated, sent to {}", to);
                self.session = Session::anonymous();
                false
            }
            GuardOutcome::Authenticated(session) => {
                self.session = session;
                self.refresh().await;
                true
            }
        }
    }

    pub async fn refresh(&mut self) -> Vec<TaskReport> {
        self.run(&RefreshTask::startup()).await
    }

    pub async fn show_page(&mut self, target: Page) -> Vec<TaskReport> {
        log::debug!("Switching to page {}", target);
        let tasks = switch_to(&mut self.page, target, true);
        self.run(&tasks).await
    }

    /// Sets the filter control to `mentor` (or back to all mentors) and
    /// reloads the list it selects.
    pub async fn apply_filter(&mut self, mentor: Option<&str>) -> FeedbackHubResult<Vec<TaskReport>> {
        match mentor.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mentor) => {
                if !self.page.mentor_filter.select(mentor) {
                    let known: Vec<&str> = self.page.mentor_filter.mentors().collect();
                    return Err(FeedbackHubError::user_input_error(
                        mentor,
                        &format!("one of the listed mentors ({})", known.join(", ")),
                    ));
                }
            }
            None => self.page.mentor_filter.clear(),
        }

        Ok(self.run(&[RefreshTask::Feedback(FeedbackScope::CurrentFilter)]).await)
    }

    pub async fn submit(&mut self, draft: &FeedbackDraft) -> SubmitOutcome {
        if !self.page.form.fill(draft) {
            log::warn!("⚠️ Mentor '{}' is not in the mentor list", draft.mentor);
        }

        let ctx = AppContext::new(&self.api, &self.session, &self.display);
        FeedbackMutator::submit(&ctx, &mut self.page).await
    }

    pub async fn delete(&mut self, confirmer: &dyn Confirmer, id: i64) -> DeleteOutcome {
        let ctx = AppContext::new(&self.api, &self.session, &self.display);
        FeedbackMutator::delete(&ctx, &mut self.page, confirmer, id).await
    }

    /// Logs in and reloads the page under the new session.
    pub async fn login(&mut self, username: &str, password: &str) -> FeedbackHubResult<bool> {
        SessionGuard::login(&self.api, username, password).await?;
        Ok(self.start().await)
    }

    pub async fn logout(&mut self, confirmer: &dyn Confirmer) -> bool {
        let logged_out = SessionGuard::logout(&self.api, &mut self.page, confirmer, &self.login_path).await;
        if logged_out {
            self.session = Session::anonymous();
        }
        logged_out
    }

    async fn run(&mut self, tasks: &[RefreshTask]) -> Vec<TaskReport> {
        let ctx = AppContext::new(&self.api, &self.session, &self.display);
        EffectRunner::run(&ctx, &mut self.page, tasks).await
    }
}
