use std::sync::Arc;

use progress_core::{Course, TrackerOptions};
use services::ProgressTracker;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn tracker(&self) -> Arc<ProgressTracker>;
}

/// Handles shared with every view through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    tracker: Arc<ProgressTracker>,
    options: TrackerOptions,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let tracker = app.tracker();
        let options = tracker.options().clone();
        Self { tracker, options }
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        self.tracker.course()
    }
}

// Provided by the application composition root (`crates/app`), never a global.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
