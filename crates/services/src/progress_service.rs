use std::sync::Arc;

use progress_core::model::{ModuleCompletion, ModuleId, ProgressRecord};
use progress_core::{Course, ModulePolicy, TrackerOptions, record_percentage};
use storage::repository::KeyValueStore;
use storage::{decode_progress, encode_progress};
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Outcome of marking a module complete.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleCompleted {
    pub module_id: ModuleId,
    pub completion: ModuleCompletion,
    /// Display percentage after the completion was saved.
    pub percentage: f64,
}

/// Loads, mutates and persists the progress record under one storage key.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
    course: Course,
    options: TrackerOptions,
}

impl ProgressService {
    #[must_use]
    pub fn new(
        clock: Clock,
        store: Arc<dyn KeyValueStore>,
        course: Course,
        options: TrackerOptions,
    ) -> Self {
        Self {
            clock,
            store,
            course,
            options,
        }
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    fn key(&self) -> &str {
        &self.options.storage_key
    }

    /// Read the stored record, or start a fresh one.
    ///
    /// Never fails: a blob that does not decode is logged, removed and replaced
    /// by a fresh record. A read failure is logged and treated as "nothing stored".
    pub async fn load(&self) -> ProgressRecord {
        let key = self.key();
        let raw = match self.store.get_item(key).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, key, "could not read stored progress; starting fresh");
                None
            }
        };

        let Some(raw) = raw else {
            return ProgressRecord::fresh(self.clock.now());
        };

        match decode_progress(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, key, "invalid progress data in storage, resetting");
                if let Err(err) = self.store.remove_item(key).await {
                    warn!(%err, key, "could not remove invalid progress data");
                }
                ProgressRecord::fresh(self.clock.now())
            }
        }
    }

    /// Stamp `lastUpdate` and write the whole record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if encoding or the write fails.
    /// The in-memory record keeps the new `lastUpdate` either way.
    pub async fn save(&self, record: &mut ProgressRecord) -> Result<(), ProgressServiceError> {
        record.touch(self.clock.now());
        let encoded = encode_progress(record)?;
        self.store.set_item(self.key(), &encoded).await?;
        debug!(
            key = self.key(),
            modules = record.modules().len(),
            "progress saved"
        );
        Ok(())
    }

    /// Parse a raw module id and apply the configured module policy.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::ModuleId` for a blank id, or
    /// `ProgressServiceError::UnknownModule` when only course modules are accepted.
    pub fn resolve_module(&self, raw: &str) -> Result<ModuleId, ProgressServiceError> {
        let module_id = ModuleId::new(raw)?;
        match self.options.module_policy {
            ModulePolicy::AcceptUnknown => Ok(module_id),
            ModulePolicy::KnownOnly if self.course.is_known(&module_id) => Ok(module_id),
            ModulePolicy::KnownOnly => Err(ProgressServiceError::UnknownModule(module_id)),
        }
    }

    /// Estimated seconds credited for `module_id`.
    #[must_use]
    pub fn time_spent(&self, module_id: &ModuleId) -> u32 {
        self.course.time_spent(module_id)
    }

    #[must_use]
    pub fn display_percentage(&self, record: &ProgressRecord) -> f64 {
        record_percentage(record, &self.course)
    }

    /// Overwrite the module's entry with a fresh completion and persist.
    ///
    /// Completing a module again replaces its date and time spent.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the id is rejected or the save fails.
    /// On a failed save the completion stays applied to `record`.
    pub async fn mark_module_complete(
        &self,
        record: &mut ProgressRecord,
        module_id: &str,
    ) -> Result<ModuleCompleted, ProgressServiceError> {
        let module_id = self.resolve_module(module_id)?;
        let completion =
            ModuleCompletion::completed_at(self.clock.now(), self.time_spent(&module_id));
        record.record_completion(module_id.clone(), completion.clone());
        self.save(record).await?;

        Ok(ModuleCompleted {
            module_id,
            completion,
            percentage: self.display_percentage(record),
        })
    }

    /// Drop the stored record and hand back a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the key cannot be removed.
    pub async fn reset(&self) -> Result<ProgressRecord, ProgressServiceError> {
        self.store.remove_item(self.key()).await?;
        Ok(ProgressRecord::fresh(self.clock.now()))
    }
}
