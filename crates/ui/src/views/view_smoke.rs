use std::time::Duration;

use dioxus::prelude::*;
use progress_core::options::NOTICE_TTL;
use progress_core::model::ModuleId;
use progress_core::{InitTiming, ModulePolicy, NotificationStyle, TrackerOptions};
use services::CompletionNotice;
use storage::repository::{KeyValueStore, Storage};

use crate::components::{ProgressBar, Toast, ToastCard};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn modules_view_lists_course_and_renders_progress() {
    let mut harness = setup_view_harness(ViewKind::Modules, TrackerOptions::default()).await;
    for id in ["introduction", "networking", "security"] {
        harness.tracker.mark_module_complete(id).await.expect("mark");
    }

    harness.rebuild();
    let html = harness.render_until("width: 15%").await;
    assert!(html.contains("id=\"overall-progress\""), "missing indicator in {html}");
    assert!(html.contains("width: 15%"), "missing fill in {html}");

    let html = harness.render_until("Resource Management").await;
    assert!(html.contains("Resource Management"), "missing module in {html}");
    assert!(html.contains("Complete again"), "missing completed row in {html}");
    assert!(html.contains("Mark complete"), "missing open row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn fixed_delay_defers_first_render() {
    let options = TrackerOptions {
        init_timing: InitTiming::FixedDelay(Duration::from_millis(20)),
        ..TrackerOptions::default()
    };
    let mut harness = setup_view_harness(ViewKind::Modules, options).await;
    harness.tracker.mark_module_complete("automation").await.expect("mark");

    harness.rebuild();
    let before = harness.render();
    assert!(before.contains("width: 0%"), "indicator filled too early in {before}");

    let after = harness.render_until("width: 5%").await;
    assert!(after.contains("width: 5%"), "missing deferred fill in {after}");
}

#[tokio::test(flavor = "current_thread")]
async fn record_view_reports_labs_and_dates() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set_item(
            "vsphere8-progress",
            r#"{"modules": {}, "labs": {"lab-1": true, "lab-2": true, "lab-3": true},
                "assessments": {}, "startDate": "2023-11-14T22:13:20Z",
                "lastUpdate": "2023-11-14T22:13:20Z"}"#,
        )
        .await
        .unwrap();

    let mut harness =
        setup_view_harness_with_storage(ViewKind::Record, TrackerOptions::default(), storage)
            .await;
    harness.rebuild();
    let html = harness.render_until("3 (estimated 15)").await;
    assert!(html.contains("3 (estimated 15)"), "missing lab count in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing start date in {html}");
    assert!(html.contains("No modules completed yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn corrupt_storage_renders_fresh_record() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set_item("vsphere8-progress", "{not json")
        .await
        .unwrap();

    let mut harness =
        setup_view_harness_with_storage(ViewKind::Record, TrackerOptions::default(), storage)
            .await;
    harness.rebuild();
    let html = harness.render_until("0 / 10").await;
    assert!(html.contains("0 / 10"), "missing module count in {html}");
    assert_eq!(
        harness.storage.kv.get_item("vsphere8-progress").await.unwrap(),
        None
    );
}

fn short_toasts() -> TrackerOptions {
    TrackerOptions {
        notice_ttl: Duration::from_millis(100),
        ..TrackerOptions::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn completing_a_module_renders_progress_and_a_toast_that_expires() {
    let mut harness = setup_view_harness(ViewKind::Modules, short_toasts()).await;
    harness.rebuild();
    harness.render_until("Mark complete").await;

    harness.actions().complete("networking");
    let html = harness.render_until("You completed module: networking").await;
    assert!(html.contains("completion-notification"), "missing toast in {html}");
    assert!(html.contains("width: 5%"), "indicator not updated in {html}");
    let html = harness.render_until("Complete again").await;
    assert!(html.contains("Complete again"), "row not refreshed in {html}");

    let html = harness.render_until_gone("completion-notification").await;
    assert!(!html.contains("completion-notification"), "toast never expired in {html}");

    let snapshot = harness.tracker.snapshot().await;
    let entry = snapshot
        .record
        .module(&ModuleId::new("networking").unwrap())
        .expect("networking saved");
    assert_eq!(entry.time_spent, 180);
}

#[tokio::test(flavor = "current_thread")]
async fn toast_expires_after_leaving_the_modules_view() {
    let mut harness = setup_view_harness(ViewKind::Modules, short_toasts()).await;
    harness.rebuild();
    harness.render_until("Mark complete").await;

    harness.actions().complete("security");
    harness.render_until("You completed module: security").await;

    harness.show(ViewKind::Record);
    let html = harness.render_until("Progress record").await;
    assert!(!html.contains("module-list"), "modules view still mounted in {html}");

    let html = harness.render_until_gone("completion-notification").await;
    assert!(!html.contains("completion-notification"), "toast never expired in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn closing_a_toast_removes_it_before_expiry() {
    let mut harness = setup_view_harness(ViewKind::Modules, TrackerOptions::default()).await;
    harness.rebuild();
    harness.render_until("Mark complete").await;

    harness.actions().complete("automation");
    harness.render_until("You completed module: automation").await;

    let notifications = harness.notifications();
    let toasts = notifications.toasts();
    assert_eq!(toasts.len(), 1);
    notifications.dismiss(toasts[0].id);

    let html = harness.render_until_gone("completion-notification").await;
    assert!(!html.contains("completion-notification"), "toast still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn log_only_style_updates_progress_without_a_toast() {
    let options = TrackerOptions {
        notification_style: NotificationStyle::LogOnly,
        ..short_toasts()
    };
    let mut harness = setup_view_harness(ViewKind::Modules, options).await;
    harness.rebuild();
    harness.render_until("Mark complete").await;

    harness.actions().complete("networking");
    let html = harness.render_until("width: 5%").await;
    assert!(html.contains("width: 5%"), "indicator not updated in {html}");
    let html = harness.render_until("Complete again").await;
    assert!(!html.contains("completion-notification"), "unexpected toast in {html}");
    assert!(harness.notifications().toasts().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_module_shows_an_inline_error() {
    let options = TrackerOptions {
        module_policy: ModulePolicy::KnownOnly,
        ..TrackerOptions::default()
    };
    let mut harness = setup_view_harness(ViewKind::Modules, options).await;
    harness.rebuild();
    harness.render_until("Mark complete").await;

    harness.actions().complete("bonus-lab");
    let html = harness.render_until("Could not save progress").await;
    assert!(html.contains("inline-error"), "missing error in {html}");
    assert!(!html.contains("completion-notification"), "unexpected toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn record_view_reset_clears_storage() {
    let mut harness = setup_view_harness(ViewKind::Record, TrackerOptions::default()).await;
    harness.tracker.mark_module_complete("lifecycle").await.expect("mark");
    harness.rebuild();
    harness.render_until("Lifecycle Management").await;

    harness.actions().reset();
    let html = harness.render_until("No modules completed yet.").await;
    assert!(html.contains("0 / 10"), "counts not reset in {html}");
    assert_eq!(
        harness.storage.kv.get_item("vsphere8-progress").await.unwrap(),
        None
    );
}

#[component]
fn ToastPreview() -> Element {
    let toast = Toast {
        id: 7,
        notice: CompletionNotice {
            module_id: "networking".parse().unwrap(),
            module_title: Some("Networking".to_string()),
            heading: "Congratulations!".to_string(),
            message: "You completed module: networking".to_string(),
            expires_after: NOTICE_TTL,
        },
    };
    rsx! {
        ToastCard { toast, on_close: move |_| {} }
    }
}

#[test]
fn toast_card_names_module_and_offers_close() {
    let mut dom = VirtualDom::new(ToastPreview);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("completion-notification"), "missing class in {html}");
    assert!(html.contains("You completed module: networking"), "missing text in {html}");
    assert!(html.contains("Close"), "missing close button in {html}");
}

#[component]
fn EmptyBar() -> Element {
    rsx! {
        ProgressBar { percentage: None }
    }
}

#[test]
fn progress_bar_before_first_render_is_empty() {
    let mut dom = VirtualDom::new(EmptyBar);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("width: 0%"), "unexpected fill in {html}");
    assert!(html.contains("–"), "missing placeholder label in {html}");
}
