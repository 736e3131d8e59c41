use crate::enums::refresh_task::RefreshTask;
use crate::enums::render_outcome::RenderOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub task: RefreshTask,
    pub outcome: RenderOutcome,
}
