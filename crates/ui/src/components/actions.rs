use std::sync::Arc;

use dioxus::prelude::*;
use services::CompletionNotice;
use tracing::warn;

use crate::components::{Notifications, ProgressDisplay, announce};
use crate::context::AppContext;

/// Tracker operations, owned by the shell so they finish even when the view
/// that started them is unmounted mid-way.
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerActions {
    revision: Signal<u64>,
    error: Signal<Option<String>>,
    complete: Callback<String>,
    reload: Callback<()>,
    reset: Callback<()>,
}

impl TrackerActions {
    /// Bumped after every change to the in-memory record. Reading it
    /// subscribes the caller.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.read()
    }

    /// Message from the last failed action, cleared by the next success.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    /// Mark a module complete, then render the indicator and announce it.
    pub fn complete(&self, module_id: impl Into<String>) {
        self.complete.call(module_id.into());
    }

    pub fn reload(&self) {
        self.reload.call(());
    }

    pub fn reset(&self) {
        self.reset.call(());
    }
}

/// Create the actions in the calling scope and share them with descendants.
pub fn use_tracker_actions_provider(
    ctx: &AppContext,
    display: ProgressDisplay,
    notifications: Notifications,
) -> TrackerActions {
    let revision = use_signal(|| 0_u64);
    let error = use_signal(|| None::<String>);
    let style = ctx.options().notification_style;
    let ttl = ctx.options().notice_ttl;

    let tracker = ctx.tracker();
    let complete = use_callback(move |module_id: String| {
        let tracker = Arc::clone(&tracker);
        let mut revision = revision;
        let mut error = error;
        spawn(async move {
            match tracker.mark_module_complete(&module_id).await {
                Ok(done) => {
                    error.set(None);
                    display.render(done.percentage);
                    let notice = CompletionNotice::for_module(&done, tracker.course(), ttl);
                    announce(style, notice, notifications);
                }
                Err(err) => {
                    warn!(%err, module = %module_id, "could not record module completion");
                    error.set(Some(format!("Could not save progress: {err}")));
                    display.render(tracker.display_percentage().await);
                }
            }
            *revision.write() += 1;
        });
    });

    let tracker = ctx.tracker();
    let reload = use_callback(move |()| {
        let tracker = Arc::clone(&tracker);
        let mut revision = revision;
        let mut error = error;
        spawn(async move {
            let snapshot = tracker.reload().await;
            error.set(None);
            display.render(snapshot.percentage);
            *revision.write() += 1;
        });
    });

    let tracker = ctx.tracker();
    let reset = use_callback(move |()| {
        let tracker = Arc::clone(&tracker);
        let mut revision = revision;
        let mut error = error;
        spawn(async move {
            match tracker.reset().await {
                Ok(snapshot) => {
                    error.set(None);
                    display.render(snapshot.percentage);
                }
                Err(err) => {
                    warn!(%err, "could not reset stored progress");
                    error.set(Some(format!("Could not reset progress: {err}")));
                }
            }
            *revision.write() += 1;
        });
    });

    use_context_provider(|| TrackerActions {
        revision,
        error,
        complete,
        reload,
        reset,
    })
}
