use progress_core::model::ProgressRecord;
use progress_core::{Course, TrackerOptions};
use tokio::sync::Mutex;

use crate::error::ProgressServiceError;
use crate::progress_service::{ModuleCompleted, ProgressService};

/// The record as last seen, with its display percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressSnapshot {
    pub record: ProgressRecord,
    pub percentage: f64,
}

/// The progress widget's state: one record held in memory and mirrored to storage.
///
/// Built once by the composition root and passed to whoever needs it.
pub struct ProgressTracker {
    service: ProgressService,
    record: Mutex<ProgressRecord>,
}

impl ProgressTracker {
    /// Load the stored record and become ready.
    pub async fn open(service: ProgressService) -> Self {
        let record = service.load().await;
        Self {
            service,
            record: Mutex::new(record),
        }
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        self.service.course()
    }

    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        self.service.options()
    }

    pub async fn snapshot(&self) -> ProgressSnapshot {
        let record = self.record.lock().await;
        self.snapshot_of(&record)
    }

    pub async fn display_percentage(&self) -> f64 {
        let record = self.record.lock().await;
        self.service.display_percentage(&record)
    }

    /// Mark `module_id` complete and persist the whole record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the id is rejected or the save fails.
    pub async fn mark_module_complete(
        &self,
        module_id: &str,
    ) -> Result<ModuleCompleted, ProgressServiceError> {
        let mut record = self.record.lock().await;
        self.service.mark_module_complete(&mut record, module_id).await
    }

    /// Re-read storage, replacing the in-memory record.
    ///
    /// The record stays locked across the read; completions queue behind it.
    pub async fn reload(&self) -> ProgressSnapshot {
        let mut record = self.record.lock().await;
        *record = self.service.load().await;
        self.snapshot_of(&record)
    }

    /// Clear stored progress and start over.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the stored key cannot be removed.
    pub async fn reset(&self) -> Result<ProgressSnapshot, ProgressServiceError> {
        let mut record = self.record.lock().await;
        *record = self.service.reset().await?;
        Ok(self.snapshot_of(&record))
    }

    fn snapshot_of(&self, record: &ProgressRecord) -> ProgressSnapshot {
        ProgressSnapshot {
            record: record.clone(),
            percentage: self.service.display_percentage(record),
        }
    }
}
