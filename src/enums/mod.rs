pub mod commands;
pub mod delete_outcome;
pub mod guard_outcome;
pub mod message_kind;
pub mod page;
pub mod refresh_task;
pub mod region_view;
pub mod render_outcome;
pub mod shell_command;
pub mod submit_outcome;
pub mod validation_error;
