use crate::enums::validation_error::ValidationError;
use crate::structs::task_report::TaskReport;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected before any network call.
    Invalid(ValidationError),
    /// Transport, HTTP or application failure; carries the shown message.
    Failed(String),
    Submitted(Vec<TaskReport>),
}
