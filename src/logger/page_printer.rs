use crate::enums::page::Page;
use crate::enums::region_view::RegionView;
use crate::structs::views::class_card::ClassCard;
use crate::structs::views::feedback_form::FeedbackForm;
use crate::structs::views::feedback_item_view::FeedbackItemView;
use crate::structs::views::page_state::PageState;
use crate::structs::views::select_control::SelectControl;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Prints the page model to the terminal.
pub struct PagePrinter;

impl PagePrinter {

    pub fn print(page: &PageState, show_ids: bool) {
        println!("{}", Self::render(page, show_ids));
    }

    pub fn render(page: &PageState, show_ids: bool) -> String {
        let mut lines = Vec::new();

        if let Some(location) = &page.location {
            lines.push(format!("➡️  Redirected to {}", location));
            lines.push("💡 Run 'feedbackhub shell' and use 'login <username>' to sign in".to_string());
            return lines.join("\n");
        }

        lines.push(RULE.to_string());
        match &page.user_info {
            Some(user) => lines.push(format!("🎓 FeedbackHub    {}", user)),
            None => lines.push("🎓 FeedbackHub".to_string()),
        }
        lines.push(Self::nav_line(page));
        lines.push(format!(
            "📊 Total feedback: {} | Average rating: {} | Active mentors: {}",
            page.stats.total_feedback, page.stats.avg_rating, page.stats.active_mentors
        ));
        lines.push(RULE.to_string());

        match page.active_page() {
            Some(Page::Submit) => Self::form_lines(&page.form, &mut lines),
            Some(Page::Classes) => Self::region_lines(&page.classes, &mut lines, Self::class_lines),
            Some(Page::Filter) => {
                lines.push(Self::select_line("Filter by mentor", &page.mentor_filter));
                lines.push(String::new());
                Self::region_lines(&page.feedback, &mut lines, |item, out| Self::feedback_lines(item, show_ids, out));
            }
            None => {}
        }

        for alert in &page.alerts {
            lines.push(format!("⚠️  {}", alert));
        }

        lines.join("\n")
    }

    fn nav_line(page: &PageState) -> String {
        Page::ALL
            .iter()
            .map(|p| {
                if page.is_nav_active(*p) {
                    format!("[{}]", p.title())
                } else {
                    format!(" {} ", p.title())
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn select_line(label: &str, control: &SelectControl) -> String {
        let options: Vec<String> = control
            .options
            .iter()
            .skip(1)
            .map(|option| {
                if option.disabled {
                    format!("({})", option.label)
                } else if option.value == control.value {
                    format!("*{}*", option.label)
                } else {
                    option.label.clone()
                }
            })
            .collect();

        let current = control
            .selected()
            .or_else(|| control.options.first().map(|option| option.label.as_str()))
            .unwrap_or(&control.placeholder);
        if options.is_empty() {
            format!("{}: {}", label, current)
        } else {
            format!("{}: {}  [{}]", label, current, options.join(", "))
        }
    }

    fn form_lines(form: &FeedbackForm, lines: &mut Vec<String>) {
        let lock = if form.reviewer_locked { " 🔒" } else { "" };
        lines.push(format!("Your name: {}{}", form.reviewer_name, lock));
        lines.push(format!("Topic:     {}", form.topic));
        lines.push(Self::select_line("Mentor", &form.mentor));
        lines.push(format!("Rating:    {}", form.rating));
        lines.push(format!("Comments:  {}", form.comments));

        let button = if form.submit.is_in_flight() {
            format!("( {} )", form.submit.label)
        } else {
            format!("[ {} ]", form.submit.label)
        };
        lines.push(button);

        if let Some(message) = &form.message {
            lines.push(format!("{} {}", message.kind.emoji(), message.text));
        }
    }

    fn region_lines<T>(region: &RegionView<T>, lines: &mut Vec<String>, item_lines: impl Fn(&T, &mut Vec<String>)) {
        match region {
            RegionView::Idle => {}
            RegionView::Loading(text) => lines.push(format!("⏳ {}", text)),
            RegionView::Empty(text) => lines.push(text.clone()),
            RegionView::Failed(text) => lines.push(format!("❌ {}", text)),
            RegionView::Items(items) => {
                for item in items {
                    item_lines(item, lines);
                    lines.push(String::new());
                }
            }
        }
    }

    fn class_lines(card: &ClassCard, lines: &mut Vec<String>) {
        lines.push(format!("📚 {}", card.title));
        lines.push(format!("   {}", card.description));
        lines.push(format!("   Mentor: {}", card.mentor));
        lines.push(format!(
            "   Students: {} | Avg rating: {} | Feedback: {}",
            card.students, card.avg_rating, card.feedback_count
        ));
    }

    fn feedback_lines(item: &FeedbackItemView, show_ids: bool, lines: &mut Vec<String>) {
        let mut header = String::new();
        if show_ids {
            header.push_str(&format!("#{} ", item.id));
        }
        if let Some(topic) = &item.topic {
            header.push_str(&format!("📖 {} ", topic));
        }
        header.push_str(&format!("⭐ {}", item.rating));
        if item.deletable {
            header.push_str("  🗑️");
        }

        lines.push(header);
        lines.push(format!("   {}", item.byline()));
        lines.push(format!("   Mentor: {}", item.mentor));
        lines.push(format!("   {}", item.comments));
    }
}
