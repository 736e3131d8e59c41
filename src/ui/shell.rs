use std::io::BufRead;
use std::time::Instant;
use crate::enums::delete_outcome::DeleteOutcome;
use crate::enums::page::Page;
use crate::enums::shell_command::ShellCommand;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::errors::FeedbackHubResult;
use crate::logger::page_printer::PagePrinter;
use crate::structs::feedback_draft::FeedbackDraft;
use crate::traits::feedback_api::FeedbackApi;
use crate::ui::terminal_prompt::TerminalPrompt;
use crate::workers::feedback_app::FeedbackApp;

const SHELL_PROMPT: &str = "feedbackhub> ";

/// Interactive session. One `FeedbackApp`, and so one cookie jar, lives for
/// the whole loop, which is what makes `login` useful.
pub struct Shell<A: FeedbackApi, R: BufRead> {
    app: FeedbackApp<A>,
    prompt: TerminalPrompt<R>,
}

impl<A: FeedbackApi, R: BufRead> Shell<A, R> {
    pub fn new(app: FeedbackApp<A>, prompt: TerminalPrompt<R>) -> Self {
        Self { app, prompt }
    }

    pub fn app(&self) -> &FeedbackApp<A> {
        &self.app
    }

    pub async fn run(&mut self) -> FeedbackHubResult<()> {
        log::info!("🐚 FeedbackHub shell, type 'help' for commands");

        if !self.app.start().await {
            log::info!("💡 Use 'login <username>' to sign in");
        }
        self.print_page();

        while let Some(line) = self.prompt.ask(SHELL_PROMPT)? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(e) => {
                    println!("❌ {}", e);
                    continue;
                }
            };

            if command == ShellCommand::Quit {
                break;
            }

            self.execute(command).await?;
            self.print_page();
        }

        log::info!("👋 Bye");
        Ok(())
    }

    pub async fn execute(&mut self, command: ShellCommand) -> FeedbackHubResult<()> {
        let needs_session = !matches!(command, ShellCommand::Help | ShellCommand::Login { .. } | ShellCommand::Quit);
        if needs_session && !self.app.session().authenticated {
            println!("🔒 Not logged in, use 'login <username>' first");
            return Ok(());
        }

        match command {
            ShellCommand::Help => println!("{}", ShellCommand::USAGE),
            ShellCommand::Login { username } => self.login(&username).await?,
            ShellCommand::Show(page) => {
                self.app.show_page(page).await;
            }
            ShellCommand::Filter(mentor) => {
                if !self.app.page().is_active(Page::Filter) {
                    self.app.show_page(Page::Filter).await;
                }
                if let Err(e) = self.app.apply_filter(mentor.as_deref()).await {
                    println!("❌ {}", e.user_message());
                }
            }
            ShellCommand::Submit => self.submit().await?,
            ShellCommand::Delete(id) => {
                if let DeleteOutcome::Deleted(_) = self.app.delete(&self.prompt, id).await {
                    log::info!("✅ Feedback #{} deleted", id);
                }
            }
            ShellCommand::Refresh => {
                self.app.refresh().await;
            }
            ShellCommand::Logout => {
                if self.app.logout(&self.prompt).await {
                    log::info!("👋 Logged out");
                }
            }
            ShellCommand::Quit => {}
        }

        Ok(())
    }

    async fn login(&mut self, username: &str) -> FeedbackHubResult<()> {
        let password = self.prompt.field("Password: ")?;

        match self.app.login(username, &password).await {
            Ok(true) => log::info!("✅ Welcome, {}", self.app.session().username().unwrap_or(username)),
            Ok(false) => log::warn!("⚠️ Logged in, but the session check did not accept the session"),
            Err(e) => println!("❌ {}", e.user_message()),
        }

        Ok(())
    }

    async fn submit(&mut self) -> FeedbackHubResult<()> {
        if !self.app.page().is_active(Page::Submit) {
            self.app.show_page(Page::Submit).await;
        }

        let reviewer_name = if self.app.page().form.reviewer_locked {
            None
        } else {
            Some(self.prompt.field("Your name: ")?)
        };

        let mentors: Vec<String> = self.app.page().form.mentor.mentors().map(str::to_string).collect();
        println!("Mentors: {}", mentors.join(", "));

        let draft = FeedbackDraft {
            reviewer_name,
            topic: self.prompt.field("Topic: ")?,
            mentor: self.prompt.field("Mentor: ")?,
            rating: self.prompt.field("Rating (1-10): ")?,
            comments: self.prompt.field("Comments: ")?,
        };

        if let SubmitOutcome::Submitted(reports) = self.app.submit(&draft).await {
            let degraded = reports.iter().filter(|r| r.outcome.is_degraded()).count();
            if degraded > 0 {
                log::warn!("⚠️ {} view(s) could not be refreshed", degraded);
            }
        }

        Ok(())
    }

    fn print_page(&mut self) {
        let show_ids = self.app.display().show_ids;
        let page = self.app.page_mut();
        page.clear_expired_message(Instant::now());
        PagePrinter::print(page, show_ids);
        page.take_alerts();
    }
}
