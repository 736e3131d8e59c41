pub mod shell;
pub mod terminal_prompt;
