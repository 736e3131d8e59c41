use crate::config::constants::{SUBMITTING_LABEL, SUBMIT_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    pub fn begin(&mut self) {
        self.enabled = false;
        self.label = SUBMITTING_LABEL.to_string();
    }

    pub fn finish(&mut self) {
        self.enabled = true;
        self.label = SUBMIT_LABEL.to_string();
    }

    pub fn is_in_flight(&self) -> bool {
        !self.enabled
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}
