use progress_core::model::ModuleId;
use progress_core::time::fixed_now;
use progress_core::{Course, TrackerOptions};
use services::{AppServices, Clock};
use storage::repository::KeyValueStore;

#[tokio::test]
async fn progress_flow_persists_across_reopen() {
    let db = "sqlite:file:memdb_progress_flow?mode=memory&cache=shared";
    let clock = Clock::fixed(fixed_now());

    let first = AppServices::new_sqlite(db, "local", clock, Course::vsphere8(), TrackerOptions::default())
        .await
        .expect("open sqlite");
    let tracker = first.tracker();
    tracker
        .mark_module_complete("networking")
        .await
        .expect("mark networking");
    tracker
        .mark_module_complete("storage-management")
        .await
        .expect("mark storage");

    let reopened = AppServices::new_sqlite(db, "local", clock, Course::vsphere8(), TrackerOptions::default())
        .await
        .expect("reopen sqlite");
    let snapshot = reopened.tracker().snapshot().await;
    let networking = snapshot
        .record
        .module(&ModuleId::new("networking").unwrap())
        .expect("networking persisted");
    assert!(networking.completed);
    assert_eq!(networking.time_spent, 180);
    assert!((snapshot.percentage - 10.0).abs() < 1e-9);

    // A different scope sees nothing.
    let other = AppServices::new_sqlite(db, "other-origin", clock, Course::vsphere8(), TrackerOptions::default())
        .await
        .expect("open other scope");
    assert!(other.tracker().snapshot().await.record.modules().is_empty());
}

#[tokio::test]
async fn corrupt_sqlite_value_falls_back_and_is_removed() {
    let db = "sqlite:file:memdb_progress_corrupt?mode=memory&cache=shared";
    let storage = storage::repository::Storage::sqlite(db, "local")
        .await
        .expect("open sqlite");
    storage
        .kv
        .set_item("vsphere8-progress", "{not json")
        .await
        .unwrap();

    let services = AppServices::from_storage(
        &storage,
        Clock::fixed(fixed_now()),
        Course::vsphere8(),
        TrackerOptions::default(),
    )
    .await;
    let snapshot = services.tracker().snapshot().await;
    assert!(snapshot.record.modules().is_empty());
    assert_eq!(snapshot.record.start_date(), snapshot.record.last_update());
    assert_eq!(storage.kv.get_item("vsphere8-progress").await.unwrap(), None);
}
