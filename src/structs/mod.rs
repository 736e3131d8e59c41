pub mod app_context;
pub mod auth_status;
pub mod class_summary;
pub mod cli;
pub mod config;
pub mod feedback_draft;
pub mod feedback_record;
pub mod login_request;
pub mod mutation_result;
pub mod new_feedback;
pub mod session;
pub mod stats;
pub mod task_report;
pub mod views;
