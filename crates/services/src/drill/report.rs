use chrono::{DateTime, Duration, Utc};

use drill_core::DrillSummary;

/// Final score of a finished drill with its start and end times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillReport {
    pub summary: DrillSummary,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl DrillReport {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }

    /// Message shown when the drill ends.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Your drill is complete. Your score is {}/{}",
            self.summary.score, self.summary.total
        )
    }
}
