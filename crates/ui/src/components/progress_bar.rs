use dioxus::prelude::*;

use crate::vm::{fill_style, format_percentage};

/// DOM id of the overall progress fill.
pub const PROGRESS_INDICATOR_ID: &str = "overall-progress";

/// Last percentage handed to the indicator.
///
/// Rendering only writes the value; whichever `ProgressBar` is mounted picks it
/// up. With no bar mounted, rendering has no visible effect.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressDisplay {
    percentage: Signal<Option<f64>>,
}

impl ProgressDisplay {
    pub fn render(mut self, percentage: f64) {
        self.percentage.set(Some(percentage));
    }

    /// `None` until the first render.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        *self.percentage.read()
    }
}

/// Create the display and make it available to descendants.
pub fn use_progress_display_provider() -> ProgressDisplay {
    let percentage = use_signal(|| None::<f64>);
    use_context_provider(|| ProgressDisplay { percentage })
}

#[component]
pub fn ProgressBar(#[props(!optional)] percentage: Option<f64>) -> Element {
    let style = fill_style(percentage.unwrap_or(0.0));
    let label = percentage.map_or_else(|| "–".to_string(), format_percentage);

    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div {
                    id: PROGRESS_INDICATOR_ID,
                    class: "progress-fill",
                    style: "{style}",
                }
            }
            span { class: "progress-label", "{label}" }
        }
    }
}
