use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Page {
    Submit,
    Classes,
    Filter,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Submit, Page::Classes, Page::Filter];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Classes => "classes",
            Self::Filter => "filter",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Submit => "Submit Feedback",
            Self::Classes => "Classes",
            Self::Filter => "View Feedback",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown page '{}', expected one of: submit, classes, filter", s))
    }
}
