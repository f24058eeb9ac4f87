mod completion;
mod module_id;
mod progress;

pub use completion::ModuleCompletion;
pub use module_id::{ModuleId, ModuleIdError};
pub use progress::{
    CURRENT_SCHEMA_VERSION, LEGACY_SCHEMA_VERSION, ProgressRecord, ProgressValidationError,
};
