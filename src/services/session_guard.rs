use crate::config::constants::LOGOUT_CONFIRM_PROMPT;
use crate::enums::guard_outcome::GuardOutcome;
use crate::errors::{FeedbackHubError, FeedbackHubResult};
use crate::structs::login_request::LoginRequest;
use crate::structs::session::Session;
use crate::structs::views::page_state::PageState;
use crate::traits::confirmer::Confirmer;
use crate::traits::feedback_api::FeedbackApi;

pub struct SessionGuard;

impl SessionGuard {
    /// Checks the session with the backend. Anything but a positive answer
    /// sends the page to `login_path`; the caller must stop initializing then.
    pub async fn verify<A: FeedbackApi + ?Sized>(api: &A, page: &mut PageState, login_path: &str) -> GuardOutcome {
        let status = match api.check_auth().await {
            Ok(status) => status,
            Err(e) => {
                log::error!("❌ Auth check failed: {}", e);
                page.navigate(login_path);
                return GuardOutcome::Redirected { to: login_path.to_string() };
            }
        };

        if !status.authenticated {
            log::info!("🔒 Not authenticated, redirecting to {}", login_path);
            page.navigate(login_path);
            return GuardOutcome::Redirected { to: login_path.to_string() };
        }

        let username = status.user.map(|user| user.username);
        if let Some(username) = username.as_deref() {
            page.user_info = Some(format!("👤 {}", username));
            page.form.lock_reviewer(username);
        }
        page.location = None;

        GuardOutcome::Authenticated(Session::authenticated(username))
    }

    /// Logs in with the backend; the session cookie lands in the API's jar.
    pub async fn login<A: FeedbackApi + ?Sized>(api: &A, username: &str, password: &str) -> FeedbackHubResult<()> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(FeedbackHubError::user_input_error(username, "a username and a password"));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = api.login(&request).await?;

        if result.success {
            log::info!("🔓 Logged in as {}", username);
            Ok(())
        } else {
            Err(FeedbackHubError::application_error("log in", &result.failure_message()))
        }
    }

    /// Ends the session after confirmation. Backend failures are only logged:
    /// the page always ends up on the login page. Returns false if declined.
    pub async fn logout<A: FeedbackApi + ?Sized>(
        api: &A,
        page: &mut PageState,
        confirmer: &dyn Confirmer,
        login_path: &str,
    ) -> bool {
        if !confirmer.confirm(LOGOUT_CONFIRM_PROMPT) {
            return false;
        }

        if let Err(e) = api.logout().await {
            log::error!("Logout error: {}", e);
        }

        page.user_info = None;
        page.navigate(login_path);
        true
    }
}
