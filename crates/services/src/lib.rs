#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod notice;
pub mod progress_service;
pub mod tracker;

pub use progress_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError};
pub use notice::{CompletionNotice, notify};
pub use progress_service::{ModuleCompleted, ProgressService};
pub use tracker::{ProgressSnapshot, ProgressTracker};
