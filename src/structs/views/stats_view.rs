use crate::helpers::format_helper::format_average;
use crate::structs::stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total_feedback: String,
    pub avg_rating: String,
    pub active_mentors: String,
}

impl StatsView {
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total_feedback: stats.total_feedback.to_string(),
            avg_rating: format_average(stats.avg_rating),
            active_mentors: stats.active_mentors.to_string(),
        }
    }

    pub fn loading() -> Self {
        Self {
            total_feedback: "…".to_string(),
            avg_rating: "…".to_string(),
            active_mentors: "…".to_string(),
        }
    }

    /// Zero values shown when the stats endpoint cannot be reached.
    pub fn unavailable() -> Self {
        Self::from_stats(&Stats::default())
    }
}

impl Default for StatsView {
    fn default() -> Self {
        Self::unavailable()
    }
}
