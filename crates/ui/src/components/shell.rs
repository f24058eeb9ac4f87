use std::sync::Arc;

use dioxus::prelude::*;
use progress_core::InitTiming;

use crate::components::{
    NotificationHost, ProgressBar, use_notifications_provider, use_progress_display_provider,
    use_tracker_actions_provider,
};
use crate::context::AppContext;

/// Frame around the tracker views: the overall indicator, the toast host, the
/// tracker actions and the deferred first render.
#[component]
pub fn TrackerShell(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let display = use_progress_display_provider();
    let notifications = use_notifications_provider();
    use_tracker_actions_provider(&ctx, display, notifications);

    let tracker = ctx.tracker();
    let timing = ctx.options().init_timing;
    use_future(move || {
        let tracker = Arc::clone(&tracker);
        async move {
            // Futures start after the view is mounted, which covers the event-driven case.
            if let InitTiming::FixedDelay(delay) = timing {
                tokio::time::sleep(delay).await;
            }
            display.render(tracker.display_percentage().await);
        }
    });

    let course_name = ctx.course().name().to_owned();

    rsx! {
        div { class: "tracker",
            header { class: "tracker-header",
                h2 { class: "view-title", "{course_name} progress" }
                ProgressBar { percentage: display.current() }
            }
            {children}
            NotificationHost {}
        }
    }
}
