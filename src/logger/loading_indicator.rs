use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spinner on stderr while the client waits for the backend.
pub struct LoadingIndicator {
    message: String,
    frames: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl LoadingIndicator {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            frames: vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let frames = self.frames.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, frames[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % frames.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.is_some()
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅ {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stop_ends_the_spinner_task() {
        let mut indicator = LoadingIndicator::new("Loading page");
        indicator.start();
        assert!(indicator.is_running());

        indicator.stop("Page loaded").await;

        assert!(!indicator.is_running());
    }

    #[tokio::test]
    async fn stopping_twice_is_harmless() {
        let mut indicator = LoadingIndicator::new("Loading page");
        indicator.start();
        indicator.error("Backend unreachable").await;
        indicator.error("Backend unreachable").await;
        assert!(!indicator.is_running());
    }
}
