use clap::Subcommand;
use crate::enums::page::Page;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Load every view once and print the whole page
    Dashboard,
    /// Switch to one page and print it
    Show {
        #[clap(value_enum)]
        page: Page,
        /// Only list feedback for this mentor (filter page)
        #[clap(short, long)]
        mentor: Option<String>,
    },
    /// Submit a feedback entry
    Submit {
        /// Reviewer name, ignored when the session carries a username
        #[clap(short, long)]
        name: Option<String>,
        #[clap(short, long)]
        topic: String,
        #[clap(short, long)]
        mentor: String,
        #[clap(short, long)]
        rating: String,
        #[clap(short, long)]
        comments: String,
    },
    /// Delete one of your own feedback entries
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
    /// End the session
    Logout {
        #[clap(short, long)]
        yes: bool,
    },
    /// Interactive session keeping one login across commands
    Shell,
}
