use crate::config::constants::{
    CLASSES_LOAD_FAILED, FEEDBACK_LOAD_FAILED, LOADING_CLASSES, LOADING_FEEDBACK, NO_CLASSES_FOUND, NO_FEEDBACK_YET,
};
use crate::enums::region_view::RegionView;
use crate::enums::render_outcome::RenderOutcome;
use crate::helpers::format_helper::{format_optional_average, format_submitted, resolve_locale};
use crate::structs::app_context::AppContext;
use crate::structs::class_summary::ClassSummary;
use crate::structs::config::display_config::DisplayConfig;
use crate::structs::feedback_record::FeedbackRecord;
use crate::structs::session::Session;
use crate::structs::views::class_card::ClassCard;
use crate::structs::views::feedback_item_view::FeedbackItemView;
use crate::structs::views::page_state::PageState;
use crate::structs::views::stats_view::StatsView;
use crate::traits::feedback_api::FeedbackApi;

pub fn render_classes(classes: &[ClassSummary]) -> RegionView<ClassCard> {
    if classes.is_empty() {
        return RegionView::Empty(NO_CLASSES_FOUND.to_string());
    }

    RegionView::Items(
        classes
            .iter()
            .map(|class| ClassCard {
                title: class.class_name.clone(),
                description: class.description.clone(),
                mentor: class.mentor.clone(),
                students: class.student_count,
                avg_rating: format_optional_average(class.avg_rating),
                feedback_count: class.feedback_count,
            })
            .collect(),
    )
}

pub fn render_feedback(
    records: &[FeedbackRecord],
    mentor: Option<&str>,
    session: &Session,
    display: &DisplayConfig,
) -> RegionView<FeedbackItemView> {
    if records.is_empty() {
        return RegionView::Empty(match mentor {
            Some(mentor) => format!("No feedback found for {}", mentor),
            None => NO_FEEDBACK_YET.to_string(),
        });
    }

    let locale = resolve_locale(display.locale.as_deref());
    RegionView::Items(
        records
            .iter()
            .map(|record| FeedbackItemView {
                id: record.id,
                topic: record.peer_name.clone().filter(|topic| !topic.is_empty()),
                reviewer: record.reviewer_name.clone(),
                submitted: format_submitted(&record.date_submitted, display, locale),
                rating: format!("{}/10", record.rating),
                mentor: record.mentor.clone(),
                comments: record.comments.clone(),
                deletable: session.can_delete(&record.reviewer_name),
            })
            .collect(),
    )
}

fn outcome_of<T>(region: &RegionView<T>) -> RenderOutcome {
    match region {
        RegionView::Items(items) => RenderOutcome::Rendered(items.len()),
        RegionView::Failed(_) => RenderOutcome::Degraded,
        _ => RenderOutcome::Empty,
    }
}

pub async fn load_stats<A: FeedbackApi + ?Sized>(ctx: &AppContext<'_, A>, page: &mut PageState) -> RenderOutcome {
    page.stats = StatsView::loading();

    match ctx.api.stats().await {
        Ok(stats) => {
            page.stats = StatsView::from_stats(&stats);
            RenderOutcome::Rendered(1)
        }
        Err(e) => {
            log::error!("❌ Error loading stats: {}", e);
            page.stats = StatsView::unavailable();
            RenderOutcome::Degraded
        }
    }
}

pub async fn load_classes<A: FeedbackApi + ?Sized>(ctx: &AppContext<'_, A>, page: &mut PageState) -> RenderOutcome {
    page.classes = RegionView::Loading(LOADING_CLASSES.to_string());

    page.classes = match ctx.api.classes().await {
        Ok(classes) => render_classes(&classes),
        Err(e) => {
            log::error!("❌ Error loading classes: {}", e);
            RegionView::Failed(CLASSES_LOAD_FAILED.to_string())
        }
    };

    outcome_of(&page.classes)
}

/// Loads the feedback list, narrowed to `mentor` when one is given.
pub async fn load_feedback<A: FeedbackApi + ?Sized>(
    ctx: &AppContext<'_, A>,
    page: &mut PageState,
    mentor: Option<String>,
) -> RenderOutcome {
    let mentor = mentor.filter(|m| !m.is_empty());
    page.feedback = RegionView::Loading(LOADING_FEEDBACK.to_string());

    page.feedback = match ctx.api.feedback(mentor.clone()).await {
        Ok(records) => render_feedback(&records, mentor.as_deref(), ctx.session, ctx.display),
        Err(e) => {
            log::error!("❌ Error loading feedback: {}", e);
            RegionView::Failed(FEEDBACK_LOAD_FAILED.to_string())
        }
    };

    outcome_of(&page.feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;
    use crate::errors::FeedbackHubError;
    use crate::structs::stats::Stats;
    use crate::traits::feedback_api::MockFeedbackApi;

    fn record(id: i64, reviewer: &str) -> FeedbackRecord {
        FeedbackRecord {
            id,
            reviewer_name: reviewer.to_string(),
            peer_name: Some("Recursion".to_string()),
            mentor: "Bob".to_string(),
            rating: 9,
            comments: "Great session".to_string(),
            date_submitted: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    fn class(avg_rating: Option<f64>) -> ClassSummary {
        ClassSummary {
            id: Some(1),
            class_name: "Bob's Class".to_string(),
            description: "Feedback session for Bob".to_string(),
            mentor: "Bob".to_string(),
            student_count: 4,
            avg_rating,
            feedback_count: 6,
        }
    }

    #[test]
    fn delete_control_only_for_own_records() {
        let session = Session::authenticated(Some("Alice".to_string()));
        let view = render_feedback(&[record(1, "alice"), record(2, "Bob")], None, &session, &DisplayConfig::default());

        let items = view.items();
        assert!(items[0].deletable);
        assert!(!items[1].deletable);
        assert_eq!(items[0].rating, "9/10");
        assert!(items[0].byline().starts_with("Reviewed by alice • "));
    }

    #[test]
    fn empty_feedback_message_names_the_mentor() {
        let session = Session::anonymous();
        let display = DisplayConfig::default();

        assert_eq!(render_feedback(&[], Some("Bob"), &session, &display), RegionView::Empty("No feedback found for Bob".to_string()));
        assert_eq!(render_feedback(&[], None, &session, &display), RegionView::Empty("No feedback submitted yet".to_string()));
    }

    #[test]
    fn class_cards_format_average() {
        let view = render_classes(&[class(Some(8.46)), class(None)]);
        let cards = view.items();

        assert_eq!(cards[0].avg_rating, "8.5");
        assert_eq!(cards[1].avg_rating, "N/A");
        assert_eq!(cards[0].students, 4);
        assert_eq!(render_classes(&[]), RegionView::Empty("No classes found".to_string()));
    }

    #[tokio::test]
    async fn failed_classes_fetch_degrades_region() {
        let mut api = MockFeedbackApi::new();
        api.expect_classes()
            .times(1)
            .returning(|| Err(FeedbackHubError::http_status_error("load classes", 500, "boom")));
        let session = Session::anonymous();
        let display = DisplayConfig::default();
        let ctx = AppContext::new(&api, &session, &display);
        let mut page = PageState::new();

        let outcome = load_classes(&ctx, &mut page).await;

        assert_eq!(outcome, RenderOutcome::Degraded);
        assert_eq!(page.classes, RegionView::Failed("Failed to load classes. Make sure the backend is running!".to_string()));
    }

    #[tokio::test]
    async fn failed_stats_fetch_shows_zeroes() {
        let mut api = MockFeedbackApi::new();
        api.expect_stats()
            .returning(|| Err(FeedbackHubError::network_error("load stats", None, "connection refused")));
        let session = Session::anonymous();
        let display = DisplayConfig::default();
        let ctx = AppContext::new(&api, &session, &display);
        let mut page = PageState::new();
        page.stats = StatsView::from_stats(&Stats { total_feedback: 12, avg_rating: 7.5, active_mentors: 3 });

        assert!(load_stats(&ctx, &mut page).await.is_degraded());
        assert_eq!(page.stats.total_feedback, "0");
        assert_eq!(page.stats.avg_rating, "0.0");
        assert_eq!(page.stats.active_mentors, "0");
    }

    #[tokio::test]
    async fn filtered_load_passes_mentor_to_backend() {
        let mut api = MockFeedbackApi::new();
        api.expect_feedback()
            .with(eq(Some("Bob".to_string())))
            .times(1)
            .returning(|_| Ok(vec![record(3, "carol")]));
        let session = Session::authenticated(Some("carol".to_string()));
        let display = DisplayConfig::default();
        let ctx = AppContext::new(&api, &session, &display);
        let mut page = PageState::new();

        let outcome = load_feedback(&ctx, &mut page, Some("Bob".to_string())).await;

        assert_eq!(outcome, RenderOutcome::Rendered(1));
        assert!(page.feedback.items()[0].deletable);
    }
}
