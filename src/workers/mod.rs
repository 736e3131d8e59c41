pub mod command_runner;
pub mod feedback_app;
