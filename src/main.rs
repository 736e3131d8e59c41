use clap::Parser;
use feedbackhub_client::structs::cli::Cli;
use feedbackhub_client::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config, cli.base_url);

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("{}", e.user_message());
        if e.is_recoverable() {
            log::info!("🔁 The problem may be temporary, try the command again");
        }
        return Err(e.into());
    }

    Ok(())
}
