use std::net::SocketAddr;
use feedbackhub_client::enums::delete_outcome::DeleteOutcome;
use feedbackhub_client::enums::page::Page;
use feedbackhub_client::enums::region_view::RegionView;
use feedbackhub_client::enums::submit_outcome::SubmitOutcome;
use feedbackhub_client::services::http_feedback_api::HttpFeedbackApi;
use feedbackhub_client::structs::config::config::Config;
use feedbackhub_client::structs::feedback_draft::FeedbackDraft;
use feedbackhub_client::traits::confirmer::AssumeAnswer;
use feedbackhub_client::workers::feedback_app::FeedbackApp;
use crate::fake_backend::{spawn_backend, CSRF_TOKEN, PASSWORD, SESSION_ID};

fn config_for(addr: SocketAddr, logged_in: bool) -> Config {
    let mut config = Config::default();
    config.server.base_url = format!("http://{}", addr);
    if logged_in {
        config.session.session_id = Some(SESSION_ID.to_string());
        config.session.csrf_token = Some(CSRF_TOKEN.to_string());
    }
    config
}

fn app_for(config: &Config) -> FeedbackApp<HttpFeedbackApi> {
    let api = HttpFeedbackApi::new(config).unwrap();
    FeedbackApp::new(api, config)
}

fn draft(mentor: &str, rating: &str) -> FeedbackDraft {
    FeedbackDraft {
        reviewer_name: Some("Mallory".to_string()),
        topic: "Recursion".to_string(),
        mentor: mentor.to_string(),
        rating: rating.to_string(),
        comments: "Great session".to_string(),
    }
}

#[tokio::test]
async fn unauthenticated_start_redirects_before_any_data_call() {
    let (addr, backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, false));

    assert!(!app.start().await);

    assert_eq!(app.page().location.as_deref(), Some("/login"));
    let backend = backend.lock().unwrap();
    assert_eq!(backend.hits("auth/check"), 1);
    for route in ["mentors", "stats", "classes", "feedback"] {
        assert_eq!(backend.hits(route), 0, "{} should not be fetched", route);
    }
}

#[tokio::test]
async fn submit_then_delete_round_trip() {
    let (addr, backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, true));

    assert!(app.start().await);
    assert_eq!(app.page().feedback, RegionView::Empty("No feedback submitted yet".to_string()));
    assert_eq!(app.page().classes.items()[0].avg_rating, "N/A");

    let outcome = app.submit(&draft("Bob", "9")).await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)), "got {:?}", outcome);

    {
        let backend = backend.lock().unwrap();
        assert_eq!(backend.records.len(), 1);
        assert_eq!(backend.records[0].reviewer_name, "alice");
        assert_eq!(backend.records[0].peer_name.as_deref(), Some("Recursion"));
        assert_eq!(backend.csrf_headers, vec![Some(CSRF_TOKEN.to_string())]);
        assert_eq!(backend.hits("mentors"), 2);
    }
    let items = app.page().feedback.items().to_vec();
    assert_eq!(items.len(), 1);
    assert!(items[0].deletable);
    assert_eq!(app.page().stats.total_feedback, "1");
    assert_eq!(app.page().stats.avg_rating, "9.0");
    assert!(app.page().form.topic.is_empty());

    app.show_page(Page::Filter).await;
    let outcome = app.delete(&AssumeAnswer(true), items[0].id).await;
    assert!(matches!(outcome, DeleteOutcome::Deleted(_)), "got {:?}", outcome);

    assert_eq!(app.page().feedback, RegionView::Empty("No feedback submitted yet".to_string()));
    assert_eq!(app.page().stats.total_feedback, "0");
    assert_eq!(backend.lock().unwrap().csrf_headers.len(), 2);
}

#[tokio::test]
async fn invalid_rating_never_reaches_the_backend() {
    let (addr, backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, true));
    app.start().await;

    let outcome = app.submit(&draft("Bob", "11")).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(backend.lock().unwrap().hits("feedback/create"), 0);
}

#[tokio::test]
async fn deleting_a_missing_record_raises_an_alert() {
    let (addr, _backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, true));
    app.start().await;

    let outcome = app.delete(&AssumeAnswer(true), 404).await;

    let DeleteOutcome::Failed(alert) = outcome else {
        panic!("expected a failed delete, got {:?}", outcome);
    };
    assert!(alert.starts_with("Failed to delete feedback: Server error: 404"));
    assert_eq!(app.page_mut().take_alerts(), vec![alert]);
}

#[tokio::test]
async fn classes_outage_only_degrades_the_classes_region() {
    let (addr, backend) = spawn_backend();
    backend.lock().unwrap().fail_classes = true;
    let mut app = app_for(&config_for(addr, true));

    assert!(app.start().await);
    app.show_page(Page::Classes).await;

    assert!(app.page().classes.is_failed());
    assert_eq!(app.page().form.mentor.mentors().count(), 2);
}

#[tokio::test]
async fn login_stores_session_and_csrf_cookies() {
    let (addr, backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, false));
    assert!(app.api().csrf_token().is_none());

    assert!(app.login("alice", PASSWORD).await.unwrap());

    assert_eq!(app.api().csrf_token().as_deref(), Some(CSRF_TOKEN));
    assert_eq!(app.session().username(), Some("alice"));
    assert_eq!(backend.lock().unwrap().hits("mentors"), 1);

    let error = app.login("alice", "wrong").await.unwrap_err();
    assert_eq!(error.status_code(), Some(401));
}

#[tokio::test]
async fn logout_always_lands_on_login_page() {
    let (addr, backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, true));
    app.start().await;

    assert!(app.logout(&AssumeAnswer(true)).await);

    assert_eq!(app.page().location.as_deref(), Some("/login"));
    assert!(!app.session().authenticated);
    assert_eq!(backend.lock().unwrap().hits("auth/logout"), 1);
}

#[tokio::test]
async fn backend_shaped_records_render_with_ownership() {
    let (addr, backend) = spawn_backend();
    let seeded = backend.lock().unwrap().seed_untitled("carol", "Carol", 6);
    let mut app = app_for(&config_for(addr, true));

    assert!(app.start().await);
    let reports = app.show_page(Page::Filter).await;
    assert!(reports.iter().all(|report| !report.outcome.is_degraded()), "got {:?}", reports);

    let items = app.page().feedback.items().to_vec();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, seeded);
    assert_eq!(items[0].topic, None);
    assert!(!items[0].deletable);
    assert!(!items[0].submitted.is_empty());
    assert_eq!(app.page().stats.avg_rating, "6.0");
}

#[tokio::test]
async fn empty_backend_reports_integer_average() {
    let (addr, _backend) = spawn_backend();
    let mut app = app_for(&config_for(addr, true));

    assert!(app.start().await);
    let reports = app.refresh().await;

    assert!(reports.iter().all(|report| !report.outcome.is_degraded()), "got {:?}", reports);
    assert_eq!(app.page().stats.total_feedback, "0");
    assert_eq!(app.page().stats.avg_rating, "0.0");
}
