use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use progress_core::time::fixed_now;
use progress_core::{Course, TrackerOptions};
use services::{AppServices, Clock, ProgressTracker};
use storage::repository::Storage;

use crate::components::{Notifications, TrackerActions, TrackerShell};
use crate::context::{UiApp, build_app_context};
use crate::views::{ModulesView, RecordView};

struct TestApp {
    tracker: Arc<ProgressTracker>,
}

impl UiApp for TestApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Modules,
    Record,
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    actions: Rc<RefCell<Option<TrackerActions>>>,
    notifications: Rc<RefCell<Option<Notifications>>>,
    view: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

impl HarnessHandles {
    fn actions(&self) -> TrackerActions {
        self.actions.borrow().clone().expect("actions registered")
    }

    fn notifications(&self) -> Notifications {
        self.notifications
            .borrow()
            .clone()
            .expect("notifications registered")
    }

    fn view(&self) -> Signal<ViewKind> {
        self.view.borrow().clone().expect("view registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewShellHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_signal(|| props.view);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.view.borrow_mut() = Some(view);
    }
    let handles = props.handles.clone();

    rsx! {
        TrackerShell {
            HandleCapture { handles }
            match view() {
                ViewKind::Modules => rsx! { ModulesView {} },
                ViewKind::Record => rsx! { RecordView {} },
            }
        }
    }
}

#[derive(Props, Clone)]
struct HandleCaptureProps {
    handles: HarnessHandles,
}

impl PartialEq for HandleCaptureProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HandleCapture(props: HandleCaptureProps) -> Element {
    let actions = use_context::<TrackerActions>();
    let notifications = use_context::<Notifications>();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.actions.borrow_mut() = Some(actions);
        *props.handles.notifications.borrow_mut() = Some(notifications);
    }
    rsx! {}
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub tracker: Arc<ProgressTracker>,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until `needle` shows up or the attempts run out.
    pub async fn render_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    /// Drive pending work until `needle` is gone or the attempts run out.
    pub async fn render_until_gone(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if !html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn actions(&self) -> TrackerActions {
        self.handles.actions()
    }

    pub fn notifications(&self) -> Notifications {
        self.handles.notifications()
    }

    /// Swap the routed view, unmounting the current one.
    pub fn show(&mut self, view: ViewKind) {
        let mut current = self.handles.view();
        current.set(view);
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }
}

pub async fn setup_view_harness(view: ViewKind, options: TrackerOptions) -> ViewHarness {
    setup_view_harness_with_storage(view, options, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    options: TrackerOptions,
    storage: Storage,
) -> ViewHarness {
    let services = AppServices::from_storage(
        &storage,
        Clock::fixed(fixed_now()),
        Course::vsphere8(),
        options,
    )
    .await;
    let tracker = services.tracker();
    let app = Arc::new(TestApp {
        tracker: Arc::clone(&tracker),
    });
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewShellHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        tracker,
        handles,
    }
}
