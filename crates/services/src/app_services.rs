use std::sync::Arc;

use progress_core::{Course, TrackerOptions};
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::tracker::ProgressTracker;

/// Assembles the app-facing tracker over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    tracker: Arc<ProgressTracker>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage in the given scope.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        scope: &str,
        clock: Clock,
        course: Course,
        options: TrackerOptions,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, scope).await?;
        Ok(Self::from_storage(&storage, clock, course, options).await)
    }

    /// Build services over an existing storage backend.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        course: Course,
        options: TrackerOptions,
    ) -> Self {
        let service = ProgressService::new(clock, Arc::clone(&storage.kv), course, options);
        let tracker = Arc::new(ProgressTracker::open(service).await);
        Self { tracker }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}
