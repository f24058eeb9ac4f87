use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion entry for a single module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCompletion {
    pub completed: bool,
    pub completed_date: DateTime<Utc>,
    /// Estimated seconds spent, taken from the course table rather than measured.
    pub time_spent: u32,
}

impl ModuleCompletion {
    #[must_use]
    pub fn completed_at(completed_date: DateTime<Utc>, time_spent: u32) -> Self {
        Self {
            completed: true,
            completed_date,
            time_spent,
        }
    }
}
