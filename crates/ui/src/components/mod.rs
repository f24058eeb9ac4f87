mod actions;
mod notification;
mod progress_bar;
mod shell;

pub use actions::{TrackerActions, use_tracker_actions_provider};
pub use notification::{
    NotificationHost, Notifications, Toast, ToastCard, announce, use_notifications_provider,
};
pub use progress_bar::{
    PROGRESS_INDICATOR_ID, ProgressBar, ProgressDisplay, use_progress_display_provider,
};
pub use shell::TrackerShell;
