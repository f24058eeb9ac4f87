//! Shared error types for the services crate.

use thiserror::Error;

use progress_core::model::{ModuleId, ModuleIdError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService` and `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    ModuleId(#[from] ModuleIdError),
    #[error("module {0} is not part of this course")]
    UnknownModule(ModuleId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
