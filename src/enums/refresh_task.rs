use std::fmt;

/// Which feedback list a refresh should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackScope {
    All,
    Mentor(String),
    /// Whatever the filter control holds when the task runs.
    CurrentFilter,
}

/// One view refresh in a mutation's effect list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshTask {
    Mentors,
    Stats,
    Classes,
    Feedback(FeedbackScope),
}

impl RefreshTask {
    pub fn startup() -> Vec<RefreshTask> {
        vec![
            RefreshTask::Mentors,
            RefreshTask::Stats,
            RefreshTask::Classes,
            RefreshTask::Feedback(FeedbackScope::All),
        ]
    }

    pub fn after_submit() -> Vec<RefreshTask> {
        vec![
            RefreshTask::Mentors,
            RefreshTask::Stats,
            RefreshTask::Feedback(FeedbackScope::All),
        ]
    }

    pub fn after_delete() -> Vec<RefreshTask> {
        vec![
            RefreshTask::Stats,
            RefreshTask::Feedback(FeedbackScope::CurrentFilter),
        ]
    }
}

impl fmt::Display for RefreshTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mentors => write!(f, "mentors"),
            Self::Stats => write!(f, "stats"),
            Self::Classes => write!(f, "classes"),
            Self::Feedback(FeedbackScope::All) => write!(f, "feedback"),
            Self::Feedback(FeedbackScope::Mentor(mentor)) => write!(f, "feedback for {}", mentor),
            Self::Feedback(FeedbackScope::CurrentFilter) => write!(f, "feedback (current filter)"),
        }
    }
}
