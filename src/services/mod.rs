pub mod effect_runner;
pub mod feedback_mutator;
pub mod http_feedback_api;
pub mod reference_loader;
pub mod renderers;
pub mod session_guard;
pub mod view_switcher;
