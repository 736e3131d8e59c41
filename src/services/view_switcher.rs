use crate::enums::page::Page;
use crate::enums::refresh_task::{FeedbackScope, RefreshTask};
use crate::structs::views::page_state::PageState;

/// Makes `target` the only visible page. `from_nav` marks the matching
/// navigation control active as well. Returns the refreshes the newly shown
/// page needs.
pub fn switch_to(page: &mut PageState, target: Page, from_nav: bool) -> Vec<RefreshTask> {
    for active in page.pages.values_mut() {
        *active = false;
    }
    for active in page.nav.values_mut() {
        *active = false;
    }

    page.pages.insert(target, true);
    if from_nav {
        page.nav.insert(target, true);
    }

    match target {
        Page::Classes => vec![RefreshTask::Classes],
        Page::Filter => vec![RefreshTask::Feedback(FeedbackScope::All)],
        Page::Submit => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_page_is_active() {
        let mut page = PageState::new();

        let tasks = switch_to(&mut page, Page::Classes, true);

        assert_eq!(tasks, vec![RefreshTask::Classes]);
        assert_eq!(page.active_page(), Some(Page::Classes));
        assert_eq!(page.pages.values().filter(|a| **a).count(), 1);
        assert!(page.is_nav_active(Page::Classes));
        assert!(!page.is_nav_active(Page::Submit));
    }

    #[test]
    fn filter_page_refreshes_unfiltered_feedback() {
        let mut page = PageState::new();
        assert_eq!(switch_to(&mut page, Page::Filter, true), vec![RefreshTask::Feedback(FeedbackScope::All)]);
        assert!(switch_to(&mut page, Page::Submit, true).is_empty());
    }

    #[test]
    fn switch_without_nav_control_clears_nav() {
        let mut page = PageState::new();

        switch_to(&mut page, Page::Filter, false);

        assert!(page.is_active(Page::Filter));
        assert!(page.nav.values().all(|active| !active));
    }
}
