use std::collections::BTreeMap;
use std::time::Instant;
use crate::config::constants::FILTER_PLACEHOLDER;
use crate::enums::page::Page;
use crate::enums::region_view::RegionView;
use crate::structs::views::class_card::ClassCard;
use crate::structs::views::feedback_form::FeedbackForm;
use crate::structs::views::feedback_item_view::FeedbackItemView;
use crate::structs::views::select_control::SelectControl;
use crate::structs::views::stats_view::StatsView;

/// Everything currently on screen. Renderers and mutations write into it,
/// the terminal printer reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Set once the client has been sent elsewhere (e.g. the login page).
    pub location: Option<String>,
    pub user_info: Option<String>,
    pub pages: BTreeMap<Page, bool>,
    pub nav: BTreeMap<Page, bool>,
    pub form: FeedbackForm,
    pub mentor_filter: SelectControl,
    pub stats: StatsView,
    pub classes: RegionView<ClassCard>,
    pub feedback: RegionView<FeedbackItemView>,
    pub alerts: Vec<String>,
}

impl PageState {
    pub fn new() -> Self {
        let mut pages: BTreeMap<Page, bool> = Page::ALL.into_iter().map(|page| (page, false)).collect();
        let mut nav = pages.clone();
        pages.insert(Page::Submit, true);
        nav.insert(Page::Submit, true);

        Self {
            location: None,
            user_info: None,
            pages,
            nav,
            form: FeedbackForm::new(),
            mentor_filter: SelectControl::new(FILTER_PLACEHOLDER),
            stats: StatsView::default(),
            classes: RegionView::Idle,
            feedback: RegionView::Idle,
            alerts: Vec::new(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }

    pub fn is_redirected(&self) -> bool {
        self.location.is_some()
    }

    pub fn active_page(&self) -> Option<Page> {
        self.pages.iter().find(|(_, active)| **active).map(|(page, _)| *page)
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.pages.get(&page).copied().unwrap_or(false)
    }

    pub fn is_nav_active(&self, page: Page) -> bool {
        self.nav.get(&page).copied().unwrap_or(false)
    }

    /// Mentor currently chosen in the feedback filter control.
    pub fn selected_filter(&self) -> Option<String> {
        self.mentor_filter.selected().map(str::to_string)
    }

    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn clear_expired_message(&mut self, now: Instant) {
        if self.form.message.as_ref().is_some_and(|message| message.is_expired_at(now)) {
            self.form.message = None;
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
