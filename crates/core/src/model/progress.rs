use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{ModuleCompletion, ModuleId};

/// Version written by the current codec.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Version assumed for blobs that carry no `schemaVersion` field.
pub const LEGACY_SCHEMA_VERSION: u32 = 1;

fn legacy_schema_version() -> u32 {
    LEGACY_SCHEMA_VERSION
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressValidationError {
    #[error("unsupported schema version {found} (newest supported is {supported})")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    #[error("module entry with an empty id")]
    EmptyModuleId,
    #[error("lastUpdate {last_update} is before startDate {start_date}")]
    LastUpdateBeforeStart {
        start_date: DateTime<Utc>,
        last_update: DateTime<Utc>,
    },
}

/// The single persisted progress structure.
///
/// Serialized as one JSON object with camelCase keys; `labs` and `assessments`
/// hold opaque markers that are only ever counted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default = "legacy_schema_version")]
    schema_version: u32,
    modules: BTreeMap<ModuleId, ModuleCompletion>,
    labs: BTreeMap<String, Value>,
    assessments: BTreeMap<String, Value>,
    start_date: DateTime<Utc>,
    last_update: DateTime<Utc>,
}

impl ProgressRecord {
    /// A record with no completions, started and last updated at `now`.
    #[must_use]
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            modules: BTreeMap::new(),
            labs: BTreeMap::new(),
            assessments: BTreeMap::new(),
            start_date: now,
            last_update: now,
        }
    }

    /// Check a freshly decoded record and bring it up to the current schema.
    ///
    /// # Errors
    ///
    /// Returns `ProgressValidationError` if the version is newer than this build
    /// understands, a module key is blank, or the timestamps are out of order.
    pub fn validate(mut self) -> Result<Self, ProgressValidationError> {
        if self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(ProgressValidationError::UnsupportedSchemaVersion {
                found: self.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        if self.modules.keys().any(ModuleId::is_blank) {
            return Err(ProgressValidationError::EmptyModuleId);
        }
        if self.last_update < self.start_date {
            return Err(ProgressValidationError::LastUpdateBeforeStart {
                start_date: self.start_date,
                last_update: self.last_update,
            });
        }

        // v1 -> v2 only adds the version field itself.
        self.schema_version = CURRENT_SCHEMA_VERSION;
        Ok(self)
    }

    /// Insert or overwrite the entry for `module_id`, returning the previous one.
    pub fn record_completion(
        &mut self,
        module_id: ModuleId,
        completion: ModuleCompletion,
    ) -> Option<ModuleCompletion> {
        self.modules.insert(module_id, completion)
    }

    /// Stamp `lastUpdate`. Called on every persisted mutation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_update = now;
    }

    #[must_use]
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    #[must_use]
    pub fn modules(&self) -> &BTreeMap<ModuleId, ModuleCompletion> {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&ModuleCompletion> {
        self.modules.get(id)
    }

    #[must_use]
    pub fn labs(&self) -> &BTreeMap<String, Value> {
        &self.labs
    }

    #[must_use]
    pub fn assessments(&self) -> &BTreeMap<String, Value> {
        &self.assessments
    }

    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    #[must_use]
    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    #[must_use]
    pub fn completed_module_count(&self) -> usize {
        self.modules.values().filter(|entry| entry.completed).count()
    }

    #[must_use]
    pub fn lab_count(&self) -> usize {
        self.labs.len()
    }
}
