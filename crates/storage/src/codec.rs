//! JSON encoding of the progress record, with validation on the way in.

use progress_core::model::{ProgressRecord, ProgressValidationError};
use thiserror::Error;

use crate::repository::StorageError;

/// Why a stored blob could not be turned back into a record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressDecodeError {
    #[error("malformed progress data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid progress data: {0}")]
    Invalid(#[from] ProgressValidationError),
}

/// Parse and validate a stored blob, upgrading older schema versions.
///
/// # Errors
///
/// Returns `ProgressDecodeError` if the blob is not a progress record or fails validation.
pub fn decode_progress(raw: &str) -> Result<ProgressRecord, ProgressDecodeError> {
    let record: ProgressRecord = serde_json::from_str(raw)?;
    Ok(record.validate()?)
}

/// Serialize the full record.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(record: &ProgressRecord) -> Result<String, StorageError> {
    serde_json::to_string(record).map_err(|err| StorageError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_core::model::{CURRENT_SCHEMA_VERSION, ModuleCompletion, ModuleId};
    use progress_core::time::fixed_now;

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            decode_progress("{not json"),
            Err(ProgressDecodeError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_json_of_the_wrong_shape() {
        for raw in ["null", "42", "[]", "{}", r#"{"modules": []}"#] {
            assert!(decode_progress(raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn encoded_record_uses_camel_case_and_current_version() {
        let now = fixed_now();
        let mut record = ProgressRecord::fresh(now);
        record.record_completion(
            ModuleId::new("networking").unwrap(),
            ModuleCompletion::completed_at(now, 180),
        );
        let json = encode_progress(&record).unwrap();
        assert!(json.contains("\"completedDate\""));
        assert!(json.contains("\"timeSpent\":180"));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains(&format!("\"schemaVersion\":{CURRENT_SCHEMA_VERSION}")));

        assert_eq!(decode_progress(&json).unwrap(), record);
    }
}
