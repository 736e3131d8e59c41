use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::delete_outcome::DeleteOutcome;
use crate::enums::page::Page;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::errors::{FeedbackHubError, FeedbackHubResult};
use crate::logger::loading_indicator::LoadingIndicator;
use crate::logger::page_printer::PagePrinter;
use crate::services::http_feedback_api::HttpFeedbackApi;
use crate::services::view_switcher::switch_to;
use crate::structs::config::config::Config;
use crate::structs::feedback_draft::FeedbackDraft;
use crate::traits::confirmer::{AssumeAnswer, Confirmer};
use crate::ui::shell::Shell;
use crate::ui::terminal_prompt::TerminalPrompt;
use crate::workers::feedback_app::FeedbackApp;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
    base_url: Option<String>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>, base_url: Option<String>) -> Self {
        Self {
            start_time: None,
            config_path,
            base_url,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> FeedbackHubResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Dashboard => self.dashboard_command().await,
            Commands::Show { page, mentor } => self.show_command(page, mentor).await,
            Commands::Submit { name, topic, mentor, rating, comments } => {
                let draft = FeedbackDraft { reviewer_name: name, topic, mentor, rating, comments };
                self.submit_command(draft).await
            }
            Commands::Delete { id, yes } => self.delete_command(id, yes).await,
            Commands::Logout { yes } => self.logout_command(yes).await,
            Commands::Shell => self.shell_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> FeedbackHubResult<()> {
        log::info!("🚀 Initializing feedbackhub configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Edit it to point at your FeedbackHub backend.");
                log::info!("🔧 Run 'feedbackhub validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> FeedbackHubResult<()> {
        log::info!("🔍 Validating feedbackhub configuration...");

        let config = self.load_config()?;
        log::info!("✅ Configuration file loaded successfully");

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 Backend: {}{}", config.server.base_url, config.server.api_path);
                if config.session.session_id.is_none() {
                    log::info!("⚠️ No session cookie configured; one-shot commands will be sent to the login page");
                }
                Ok(())
            }
            Err(issues) => {
                log::info!("❌ Issues found:");
                for issue in &issues {
                    log::info!("   - {}", issue);
                }
                Err(FeedbackHubError::config_error(
                    &format!("{} issue(s) in configuration", issues.len()),
                    Some("Fix the fields listed above"),
                ))
            }
        }
    }

    async fn dashboard_command(&self) -> FeedbackHubResult<()> {
        let mut app = self.build_app()?;
        if !Self::start_app(&mut app).await {
            PagePrinter::print(app.page(), app.display().show_ids);
            return Ok(());
        }

        // start() already loaded every view, so only the visibility changes
        for page in Page::ALL {
            switch_to(app.page_mut(), page, true);
            PagePrinter::print(app.page(), app.display().show_ids);
        }

        Ok(())
    }

    async fn show_command(&self, page: Page, mentor: Option<String>) -> FeedbackHubResult<()> {
        let mut app = self.build_app()?;
        if Self::start_app(&mut app).await {
            app.show_page(page).await;

            if let Some(mentor) = mentor.as_deref() {
                if page != Page::Filter {
                    log::warn!("⚠️ --mentor only applies to the filter page");
                }
                app.apply_filter(Some(mentor)).await?;
            }
        }

        PagePrinter::print(app.page(), app.display().show_ids);
        Ok(())
    }

    async fn submit_command(&self, draft: FeedbackDraft) -> FeedbackHubResult<()> {
        let mut app = self.build_app()?;
        if !Self::start_app(&mut app).await {
            PagePrinter::print(app.page(), app.display().show_ids);
            return Err(Self::not_authenticated());
        }

        let outcome = app.submit(&draft).await;
        PagePrinter::print(app.page(), app.display().show_ids);

        match outcome {
            SubmitOutcome::Submitted(_) => Ok(()),
            SubmitOutcome::Invalid(e) => Err(FeedbackHubError::application_error("submit feedback", &e.to_string())),
            SubmitOutcome::Failed(message) => Err(FeedbackHubError::application_error("submit feedback", &message)),
        }
    }

    async fn delete_command(&self, id: i64, yes: bool) -> FeedbackHubResult<()> {
        let mut app = self.build_app()?;
        if !Self::start_app(&mut app).await {
            PagePrinter::print(app.page(), app.display().show_ids);
            return Err(Self::not_authenticated());
        }
        switch_to(app.page_mut(), Page::Filter, true);

        let outcome = if yes {
            app.delete(&AssumeAnswer(true), id).await
        } else {
            app.delete(&TerminalPrompt::stdin(), id).await
        };
        PagePrinter::print(app.page(), app.display().show_ids);

        match outcome {
            DeleteOutcome::Deleted(_) => {
                log::info!("✅ Feedback #{} deleted", id);
                Ok(())
            }
            DeleteOutcome::Cancelled => Ok(()),
            DeleteOutcome::Failed(alert) => Err(FeedbackHubError::application_error("delete feedback", &alert)),
        }
    }

    async fn logout_command(&self, yes: bool) -> FeedbackHubResult<()> {
        let mut app = self.build_app()?;
        let confirmer: Box<dyn Confirmer> = if yes {
            Box::new(AssumeAnswer(true))
        } else {
            Box::new(TerminalPrompt::stdin())
        };

        if app.logout(confirmer.as_ref()).await {
            log::info!("👋 Logged out");
            log::info!("💡 Remove session.session_id from your config to stop reusing the old cookie");
            PagePrinter::print(app.page(), app.display().show_ids);
        }

        Ok(())
    }

    async fn shell_command(&self) -> FeedbackHubResult<()> {
        let app = self.build_app()?;
        let mut shell = Shell::new(app, TerminalPrompt::stdin());
        shell.run().await
    }

    fn load_config(&self) -> FeedbackHubResult<Config> {
        let config = match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'feedbackhub init' to create a configuration file.");
                return Err(e);
            }
        };

        Ok(Self::apply_overrides(config, self.base_url.as_deref()))
    }

    fn apply_overrides(mut config: Config, base_url: Option<&str>) -> Config {
        if let Some(base_url) = base_url {
            log::debug!("Using backend from --base-url: {}", base_url);
            config.server.base_url = base_url.to_string();
        }
        config
    }

    fn build_app(&self) -> FeedbackHubResult<FeedbackApp<HttpFeedbackApi>> {
        let config = self.load_config()?;
        let api = HttpFeedbackApi::new(&config)?;
        Ok(FeedbackApp::new(api, &config))
    }

    async fn start_app(app: &mut FeedbackApp<HttpFeedbackApi>) -> bool {
        let mut indicator = LoadingIndicator::new("🔄 Loading FeedbackHub");
        indicator.start();

        let loaded = app.start().await;
        if loaded {
            indicator.stop("FeedbackHub loaded").await;
        } else {
            indicator.error("Not authenticated").await;
        }
        loaded
    }

    fn not_authenticated() -> FeedbackHubError {
        FeedbackHubError::config_error(
            "the session is not authenticated",
            Some("Set session.session_id in your config or use 'feedbackhub shell' to log in"),
        )
    }
}
