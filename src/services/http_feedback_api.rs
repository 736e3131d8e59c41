use std::sync::Arc;
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::config::constants::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, SESSION_COOKIE_NAME};
use crate::errors::{FeedbackHubError, FeedbackHubResult};
use crate::helpers::cookie_helper::{cookie_value, decode_cookie_value};
use crate::structs::auth_status::AuthStatus;
use crate::structs::class_summary::ClassSummary;
use crate::structs::config::config::Config;
use crate::structs::feedback_record::FeedbackRecord;
use crate::structs::login_request::LoginRequest;
use crate::structs::mutation_result::MutationResult;
use crate::structs::new_feedback::NewFeedback;
use crate::structs::stats::Stats;
use crate::traits::feedback_api::FeedbackApi;

/// `FeedbackApi` over HTTP. Requests carry the cookie jar, so the backend sees
/// the same session cookie a browser would send.
#[derive(Clone)]
pub struct HttpFeedbackApi {
    client: Client,
    jar: Arc<Jar>,
    server_url: Url,
    api_base: String,
}

impl HttpFeedbackApi {
    pub fn new(config: &Config) -> FeedbackHubResult<Self> {
        let server_url = Url::parse(&config.server.base_url).map_err(|e| {
            FeedbackHubError::config_error(
                &format!("invalid server.base_url '{}': {}", config.server.base_url, e),
                Some("Use a full URL such as http://localhost:8000"),
            )
        })?;

        let jar = Arc::new(Jar::default());
        if let Some(session_id) = &config.session.session_id {
            jar.add_cookie_str(&format!("{}={}", SESSION_COOKIE_NAME, session_id), &server_url);
        }
        if let Some(csrf_token) = &config.session.csrf_token {
            jar.add_cookie_str(&format!("{}={}", CSRF_COOKIE_NAME, csrf_token), &server_url);
        }

        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        let api_base = format!(
            "{}{}",
            config.server.base_url.trim_end_matches('/'),
            config.server.api_path.trim_end_matches('/')
        );

        Ok(Self {
            client,
            jar,
            server_url,
            api_base,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Value of the `csrftoken` cookie the server has set (or the config seeded).
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.server_url)?;
        let header = header.to_str().ok()?;
        cookie_value(header, CSRF_COOKIE_NAME)
            .map(|token| decode_cookie_value(&token))
            .filter(|token| !token.is_empty())
    }

    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match self.csrf_token() {
            Some(token) => request.header(CSRF_HEADER_NAME, token),
            None => {
                log::debug!("No {} cookie, sending request without {}", CSRF_COOKIE_NAME, CSRF_HEADER_NAME);
                request
            }
        }
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> FeedbackHubResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| FeedbackHubError::network_error(operation, e.url().map(Url::as_str), &e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FeedbackHubError::network_error(operation, None, &e.to_string()))?;

        log::debug!("{} -> HTTP {}", operation, status.as_u16());

        if !status.is_success() {
            return Err(FeedbackHubError::http_status_error(operation, status.as_u16(), &body));
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, request: RequestBuilder) -> FeedbackHubResult<T> {
        let body = self.send(operation, request).await?;
        serde_json::from_str(&body).map_err(|e| FeedbackHubError::parse_error(operation, &e.to_string()))
    }

    async fn mutate(&self, operation: &str, request: RequestBuilder) -> FeedbackHubResult<MutationResult> {
        let body: Value = self.get_json(operation, self.with_csrf(request)).await?;
        Ok(MutationResult::from(body))
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn check_auth(&self) -> FeedbackHubResult<AuthStatus> {
        self.get_json("check authentication", self.client.get(self.endpoint("/auth/check"))).await
    }

    async fn login(&self, request: &LoginRequest) -> FeedbackHubResult<MutationResult> {
        let builder = self.client.post(self.endpoint("/auth/login")).json(request);
        self.mutate("log in", builder).await
    }

    async fn logout(&self) -> FeedbackHubResult<()> {
        let builder = self
            .client
            .post(self.endpoint("/auth/logout"))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        self.send("log out", self.with_csrf(builder)).await.map(|_| ())
    }

    async fn mentors(&self) -> FeedbackHubResult<Vec<String>> {
        self.get_json("load mentors", self.client.get(self.endpoint("/mentors"))).await
    }

    async fn stats(&self) -> FeedbackHubResult<Stats> {
        self.get_json("load stats", self.client.get(self.endpoint("/stats"))).await
    }

    async fn classes(&self) -> FeedbackHubResult<Vec<ClassSummary>> {
        self.get_json("load classes", self.client.get(self.endpoint("/classes"))).await
    }

    async fn feedback(&self, mentor: Option<String>) -> FeedbackHubResult<Vec<FeedbackRecord>> {
        let mut builder = self.client.get(self.endpoint("/feedback"));
        if let Some(mentor) = mentor.filter(|m| !m.is_empty()) {
            builder = builder.query(&[("mentor", mentor)]);
        }
        self.get_json("load feedback", builder).await
    }

    async fn create_feedback(&self, feedback: &NewFeedback) -> FeedbackHubResult<MutationResult> {
        let builder = self.client.post(self.endpoint("/feedback/create")).json(feedback);
        self.mutate("submit feedback", builder).await
    }

    async fn delete_feedback(&self, id: i64) -> FeedbackHubResult<MutationResult> {
        let builder = self.client.delete(self.endpoint(&format!("/feedback/{}", id)));
        self.mutate("delete feedback", builder).await
    }
}
