use crate::enums::render_outcome::RenderOutcome;
use crate::structs::views::page_state::PageState;
use crate::traits::feedback_api::FeedbackApi;

/// Fetches the mentor list and repopulates every mentor control on the page,
/// keeping each control's selection when the mentor is still listed.
pub async fn load_mentors<A: FeedbackApi + ?Sized>(api: &A, page: &mut PageState) -> RenderOutcome {
    match api.mentors().await {
        Ok(mentors) => {
            page.form.mentor.repopulate(&mentors);
            page.mentor_filter.repopulate(&mentors);
            log::debug!("Loaded {} mentors", mentors.len());

            if mentors.is_empty() {
                RenderOutcome::Empty
            } else {
                RenderOutcome::Rendered(mentors.len())
            }
        }
        Err(e) => {
            // the filter keeps its previous options
            log::error!("❌ Error loading mentors: {}", e);
            page.form.mentor.show_error();
            RenderOutcome::Degraded
        }
    }
}
