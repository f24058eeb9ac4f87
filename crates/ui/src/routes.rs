use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::components::TrackerShell;
use crate::views::{ModulesView, RecordView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ModulesView)] Modules {},
        #[route("/record", RecordView)] Record {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                TrackerShell {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Training" }
            ul {
                li { Link { to: Route::Modules {}, "Modules" } }
                li { Link { to: Route::Record {}, "Progress record" } }
            }
        }
    }
}
