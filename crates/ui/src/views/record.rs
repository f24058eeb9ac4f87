use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::TrackerActions;
use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{ModuleRowVm, RecordSummaryVm, map_module_rows, map_record_summary};

#[derive(Clone, Debug, PartialEq, Eq)]
struct RecordData {
    summary: RecordSummaryVm,
    completed: Vec<ModuleRowVm>,
}

#[component]
pub fn RecordView() -> Element {
    let ctx = use_context::<AppContext>();
    let actions = use_context::<TrackerActions>();
    let tracker = ctx.tracker();
    let mut confirming = use_signal(|| false);

    let resource = use_resource(move || {
        let tracker = Arc::clone(&tracker);
        let _revision = actions.revision();
        async move {
            let snapshot = tracker.snapshot().await;
            let completed = map_module_rows(tracker.course(), &snapshot.record)
                .into_iter()
                .filter(|row| row.completed)
                .collect();
            RecordData {
                summary: map_record_summary(tracker.course(), &snapshot),
                completed,
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page record-page",
            header { class: "view-header",
                h2 { class: "view-title", "Progress record" }
                p { class: "view-subtitle", "What is stored for this course on this device." }
            }
            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    RecordDetails { summary: data.summary.clone() }
                    if data.completed.is_empty() {
                        p { class: "empty", "No modules completed yet." }
                    } else {
                        table { class: "completions",
                            thead {
                                tr {
                                    th { "Module" }
                                    th { "Completed" }
                                    th { "Time spent" }
                                }
                            }
                            tbody {
                                for row in data.completed.iter() {
                                    tr { key: "{row.id}",
                                        td { "{row.title}" }
                                        td { {row.completed_at_str.clone().unwrap_or_default()} }
                                        td { {row.time_spent_str.clone().unwrap_or_default()} }
                                    }
                                }
                            }
                        }
                    }
                },
            }
            div { class: "record-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| actions.reload(),
                    "Reload from storage"
                }
                if confirming() {
                    span { "Erase all progress?" }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            confirming.set(false);
                            actions.reset();
                        },
                        "Erase"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| confirming.set(true),
                        "Reset progress"
                    }
                }
                if let Some(message) = actions.error() {
                    span { class: "inline-error", "{message}" }
                }
            }
        }
    }
}

#[component]
fn RecordDetails(summary: RecordSummaryVm) -> Element {
    rsx! {
        dl { class: "summary",
            dt { "Overall" }
            dd { "{summary.percentage_str}" }

            dt { "Modules" }
            dd { "{summary.completed_modules} / {summary.total_modules}" }

            dt { "Labs" }
            dd { "{summary.labs} (estimated {summary.estimated_labs})" }

            dt { "Assessments" }
            dd { "{summary.assessments}" }

            dt { "Started" }
            dd { "{summary.started_at_str}" }

            dt { "Last update" }
            dd { "{summary.last_update_str}" }

            dt { "Schema version" }
            dd { "{summary.schema_version}" }
        }
    }
}
