use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Write};
use crate::errors::FeedbackHubResult;
use crate::traits::confirmer::Confirmer;

/// Line-based questions on the terminal.
pub struct TerminalPrompt<R: BufRead> {
    input: RefCell<R>,
}

impl TerminalPrompt<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalPrompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }

    /// Prints `label` and reads one line without its line ending. `None` at
    /// end of input.
    pub fn ask(&self, label: &str) -> FeedbackHubResult<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `ask`, but end of input reads as an empty answer.
    pub fn field(&self, label: &str) -> FeedbackHubResult<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }
}

impl<R: BufRead> Confirmer for TerminalPrompt<R> {
    fn confirm(&self, prompt: &str) -> bool {
        match self.ask(&format!("{} (y/N): ", prompt)) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                log::error!("❌ Could not read answer: {}", e);
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_end_of_input() {
        let prompt = TerminalPrompt::new(Cursor::new("alice\r\nsecret\n"));

        assert_eq!(prompt.ask("Name: ").unwrap().as_deref(), Some("alice"));
        assert_eq!(prompt.field("Password: ").unwrap(), "secret");
        assert_eq!(prompt.ask("More: ").unwrap(), None);
        assert_eq!(prompt.field("More: ").unwrap(), "");
    }

    #[test]
    fn only_explicit_yes_confirms() {
        let prompt = TerminalPrompt::new(Cursor::new("y\nYES\n\nno\n"));

        assert!(prompt.confirm("Delete?"));
        assert!(prompt.confirm("Delete?"));
        assert!(!prompt.confirm("Delete?"));
        assert!(!prompt.confirm("Delete?"));
        assert!(!prompt.confirm("Delete?"));
    }
}
