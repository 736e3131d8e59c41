use std::str::FromStr;
use crate::enums::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Login { username: String },
    Show(Page),
    /// `None` lists feedback for every mentor.
    Filter(Option<String>),
    Submit,
    Delete(i64),
    Refresh,
    Logout,
    Quit,
}

impl ShellCommand {
    pub const USAGE: &'static str = "Commands:
  login <username>      log in (password is prompted)
  show <page>           switch to submit, classes or filter
  filter [mentor]       list feedback for a mentor, or everyone
  submit                fill in and submit the feedback form
  delete <id>           delete one of your feedback entries
  refresh               reload every view
  logout                end the session
  help                  show this help
  quit                  leave the shell";
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "help" | "?" => Ok(Self::Help),
            "login" if !rest.is_empty() => Ok(Self::Login { username: rest.to_string() }),
            "login" => Err("usage: login <username>".to_string()),
            "show" => rest.parse().map(Self::Show),
            "filter" if rest.is_empty() => Ok(Self::Filter(None)),
            "filter" => Ok(Self::Filter(Some(rest.to_string()))),
            "submit" => Ok(Self::Submit),
            "delete" => rest
                .parse()
                .map(Self::Delete)
                .map_err(|_| format!("usage: delete <id>, got '{}'", rest)),
            "refresh" => Ok(Self::Refresh),
            "logout" => Ok(Self::Logout),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}', type 'help' for a list", other)),
        }
    }
}
