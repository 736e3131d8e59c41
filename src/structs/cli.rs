use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "feedbackhub")]
#[clap(about = "Terminal client for the FeedbackHub peer-feedback tracker", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/feedbackhub/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overriding server.base_url from the config
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
