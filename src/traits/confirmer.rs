/// Interactive yes/no question asked before destructive actions.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every question with the same value (`--yes`).
pub struct AssumeAnswer(pub bool);

impl Confirmer for AssumeAnswer {
    fn confirm(&self, prompt: &str) -> bool {
        log::debug!("{} -> {}", prompt, if self.0 { "yes" } else { "no" });
        self.0
    }
}
