#![forbid(unsafe_code)]

pub mod codec;
pub mod repository;
pub mod sqlite;

pub use codec::{ProgressDecodeError, decode_progress, encode_progress};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
