use crate::enums::refresh_task::{FeedbackScope, RefreshTask};
use crate::enums::render_outcome::RenderOutcome;
use crate::services::reference_loader::load_mentors;
use crate::services::renderers::{load_classes, load_feedback, load_stats};
use crate::structs::app_context::AppContext;
use crate::structs::task_report::TaskReport;
use crate::structs::views::page_state::PageState;
use crate::traits::feedback_api::FeedbackApi;

pub struct EffectRunner;

impl EffectRunner {
    /// Runs `tasks` one after another, each awaited before the next starts.
    /// A degraded task does not stop the ones after it.
    pub async fn run<A: FeedbackApi + ?Sized>(
        ctx: &AppContext<'_, A>,
        page: &mut PageState,
        tasks: &[RefreshTask],
    ) -> Vec<TaskReport> {
        let mut reports = Vec::with_capacity(tasks.len());

        for task in tasks {
            let outcome = Self::run_one(ctx, page, task).await;
            if outcome.is_degraded() {
                log::warn!("⚠️ Refresh of {} degraded", task);
            }
            reports.push(TaskReport {
                task: task.clone(),
                outcome,
            });
        }

        reports
    }

    async fn run_one<A: FeedbackApi + ?Sized>(
        ctx: &AppContext<'_, A>,
        page: &mut PageState,
        task: &RefreshTask,
    ) -> RenderOutcome {
        match task {
            RefreshTask::Mentors => load_mentors(ctx.api, page).await,
            RefreshTask::Stats => load_stats(ctx, page).await,
            RefreshTask::Classes => load_classes(ctx, page).await,
            RefreshTask::Feedback(FeedbackScope::All) => load_feedback(ctx, page, None).await,
            RefreshTask::Feedback(FeedbackScope::Mentor(mentor)) => load_feedback(ctx, page, Some(mentor.clone())).await,
            RefreshTask::Feedback(FeedbackScope::CurrentFilter) => {
                let mentor = page.selected_filter();
                load_feedback(ctx, page, mentor).await
            }
        }
    }
}
