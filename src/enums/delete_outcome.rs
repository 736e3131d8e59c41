use crate::structs::task_report::TaskReport;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    /// Carries the alert text.
    Failed(String),
    Deleted(Vec<TaskReport>),
}
