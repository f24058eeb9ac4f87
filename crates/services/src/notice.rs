use std::time::Duration;

use progress_core::model::ModuleId;
use progress_core::{Course, NotificationStyle};
use tracing::info;

use crate::progress_service::ModuleCompleted;

/// Acknowledgment shown after a module is completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionNotice {
    pub module_id: ModuleId,
    pub module_title: Option<String>,
    pub heading: String,
    pub message: String,
    pub expires_after: Duration,
}

impl CompletionNotice {
    #[must_use]
    pub fn for_module(event: &ModuleCompleted, course: &Course, expires_after: Duration) -> Self {
        let module_title = course
            .spec_for(&event.module_id)
            .map(|spec| spec.title.to_owned());
        Self {
            message: format!("You completed module: {}", event.module_id),
            module_id: event.module_id.clone(),
            module_title,
            heading: "Congratulations!".to_owned(),
            expires_after,
        }
    }

    /// Write the notice to the log.
    pub fn log(&self) {
        info!(module = %self.module_id, "{}", self.message);
    }
}

/// Announce a completion in the configured style.
///
/// Returns the notice when it should be shown on screen; the log-only style
/// logs it instead and returns `None`.
#[must_use]
pub fn notify(style: NotificationStyle, notice: CompletionNotice) -> Option<CompletionNotice> {
    match style {
        NotificationStyle::Visual => Some(notice),
        NotificationStyle::LogOnly => {
            notice.log();
            None
        }
    }
}
