use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::TrackerActions;
use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{ModuleRowVm, map_module_rows};

#[component]
pub fn ModulesView() -> Element {
    let ctx = use_context::<AppContext>();
    let actions = use_context::<TrackerActions>();
    let tracker = ctx.tracker();

    let resource = use_resource(move || {
        let tracker = Arc::clone(&tracker);
        let _revision = actions.revision();
        async move {
            let snapshot = tracker.snapshot().await;
            map_module_rows(tracker.course(), &snapshot.record)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page modules-page",
            header { class: "view-header",
                h2 { class: "view-title", "Modules" }
                p { class: "view-subtitle", "Mark a module complete when you finish it." }
            }
            if let Some(message) = actions.error() {
                p { class: "inline-error", "{message}" }
            }
            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    ul { class: "module-list",
                        for row in rows {
                            ModuleRow {
                                key: "{row.id}",
                                row: row.clone(),
                                on_complete: move |id: String| actions.complete(id),
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ModuleRow(row: ModuleRowVm, on_complete: EventHandler<String>) -> Element {
    let id = row.id.clone();
    let button_label = if row.completed {
        "Complete again"
    } else {
        "Mark complete"
    };

    rsx! {
        li { class: if row.completed { "module-row completed" } else { "module-row" },
            div { class: "module-info",
                span { class: "module-title", "{row.title}" }
                if !row.known {
                    span { class: "module-tag", "not in course" }
                }
                if let (Some(done_at), Some(spent)) = (row.completed_at_str.clone(), row.time_spent_str.clone()) {
                    span { class: "module-meta", "Completed {done_at} · {spent}" }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_complete.call(id.clone()),
                "{button_label}"
            }
        }
    }
}
