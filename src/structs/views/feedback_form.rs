use crate::config::constants::MENTOR_PLACEHOLDER;
use crate::enums::message_kind::MessageKind;
use crate::structs::feedback_draft::FeedbackDraft;
use crate::structs::session::Session;
use crate::structs::views::flash_message::FlashMessage;
use crate::structs::views::select_control::SelectControl;
use crate::structs::views::submit_control::SubmitControl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub reviewer_name: String,
    /// Read-only once the session guard has filled in the username.
    pub reviewer_locked: bool,
    pub topic: String,
    pub mentor: SelectControl,
    pub rating: String,
    pub comments: String,
    pub submit: SubmitControl,
    pub message: Option<FlashMessage>,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            reviewer_name: String::new(),
            reviewer_locked: false,
            topic: String::new(),
            mentor: SelectControl::new(MENTOR_PLACEHOLDER),
            rating: String::new(),
            comments: String::new(),
            submit: SubmitControl::default(),
            message: None,
        }
    }

    pub fn lock_reviewer(&mut self, username: &str) {
        self.reviewer_name = username.to_string();
        self.reviewer_locked = true;
    }

    /// Copies typed values into the form. A locked reviewer name is kept.
    /// Returns false when the mentor is not one of the offered options.
    pub fn fill(&mut self, draft: &FeedbackDraft) -> bool {
        if !self.reviewer_locked {
            self.reviewer_name = draft.reviewer_name.clone().unwrap_or_default();
        }
        self.topic = draft.topic.clone();
        self.rating = draft.rating.clone();
        self.comments = draft.comments.clone();

        if draft.mentor.is_empty() {
            self.mentor.clear();
            return true;
        }
        let selected = self.mentor.select(&draft.mentor);
        if !selected {
            self.mentor.clear();
        }
        selected
    }

    /// Clears every input. The locked reviewer name is filled in again from
    /// the session.
    pub fn reset(&mut self, session: &Session) {
        self.reviewer_name = match (self.reviewer_locked, session.username()) {
            (true, Some(username)) => username.to_string(),
            _ => String::new(),
        };
        self.topic.clear();
        self.mentor.clear();
        self.rating.clear();
        self.comments.clear();
    }

    pub fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.message = Some(FlashMessage::new(kind, text));
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_locked_username() {
        let session = Session::authenticated(Some("alice".to_string()));
        let mut form = FeedbackForm::new();
        form.lock_reviewer("alice");
        form.mentor.repopulate(&["Bob".to_string()]);
        form.fill(&FeedbackDraft {
            reviewer_name: Some("mallory".to_string()),
            topic: "Recursion".to_string(),
            mentor: "Bob".to_string(),
            rating: "9".to_string(),
            comments: "Great".to_string(),
        });
        assert_eq!(form.reviewer_name, "alice");
        assert_eq!(form.mentor.selected(), Some("Bob"));

        form.reset(&session);

        assert_eq!(form.reviewer_name, "alice");
        assert!(form.topic.is_empty());
        assert_eq!(form.mentor.selected(), None);
        assert!(form.rating.is_empty());
        assert!(form.comments.is_empty());
    }

    #[test]
    fn unknown_mentor_is_not_selected() {
        let mut form = FeedbackForm::new();
        form.mentor.repopulate(&["Bob".to_string()]);

        let draft = FeedbackDraft { mentor: "Zed".to_string(), ..FeedbackDraft::default() };

        assert!(!form.fill(&draft));
        assert_eq!(form.mentor.selected(), None);
    }
}
