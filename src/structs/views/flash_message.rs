use std::time::Instant;
use crate::config::constants::message_lifetime;
use crate::enums::message_kind::MessageKind;

/// Inline message under the form. Disappears after a few seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: Instant,
}

impl FlashMessage {
    pub fn new(kind: MessageKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= message_lifetime()
    }
}
