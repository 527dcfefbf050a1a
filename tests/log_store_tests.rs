mod common;
use campus360::attendance::{
    AttendanceEvent, AttendanceLogStore, AttendanceStatus, LOG_CAPACITY, LOG_KEY,
};
use campus360::db::{DbPool, KeyValueStore, MemoryStore, open_or_memory};
use campus360::errors::StoreError;
use campus360::utils::logging::TEST_LOGGING;
use chrono::TimeDelta;
use common::{capture_logs, local_at, setup_test_db};
use std::sync::LazyLock;

fn event(i: i64, mode: &str) -> AttendanceEvent {
    let at = local_at(8, 0, 0, 0) + TimeDelta::minutes(i);
    AttendanceEvent::new(at, AttendanceStatus::Present, mode)
}

#[test]
fn test_empty_store_reads_empty_log() {
    let store = AttendanceLogStore::new(MemoryStore::new());
    assert!(store.read_all().is_empty());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_append_caps_log_at_capacity() {
    let mut store = AttendanceLogStore::new(MemoryStore::new());

    for i in 0..205 {
        store.append(event(i, &format!("scan-{i}")));
    }

    let log = store.read_all();
    assert_eq!(log.len(), LOG_CAPACITY);
    assert_eq!(log.entries()[0].mode, "scan-204");
    assert_eq!(log.entries()[LOG_CAPACITY - 1].mode, "scan-5");
    assert!(log.iter().all(|e| e.mode != "scan-4"));
}

#[test]
fn test_entries_are_newest_first() {
    let mut store = AttendanceLogStore::new(MemoryStore::new());

    for i in 0..10 {
        store.append(event(i, "QR"));
    }

    let log = store.read_all();
    for pair in log.entries().windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    assert_eq!(log.latest().unwrap().timestamp, event(9, "QR").timestamp);
}

#[test]
fn test_non_json_value_recovers_to_empty() {
    LazyLock::force(&TEST_LOGGING);
    let mut kv = MemoryStore::new();
    kv.set(LOG_KEY, "definitely { not json").unwrap();

    let mut store = AttendanceLogStore::new(kv);
    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    assert!(store.read_all().is_empty());

    store.append(event(0, "QR"));
    let log = store.read_all();
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].mode, "QR");
}

#[test]
fn test_non_array_values_recover_to_empty() {
    for raw in [r#"{"status":"Late"}"#, "42", "null", r#"[1, 2, 3]"#, r#"[{"mode":"QR"}]"#] {
        let mut kv = MemoryStore::new();
        kv.set(LOG_KEY, raw).unwrap();

        let mut store = AttendanceLogStore::new(kv);
        assert!(store.read_all().is_empty(), "value {raw} should read as empty");

        store.append(event(1, "Face"));
        assert_eq!(store.read_all().len(), 1, "value {raw} should restart the log");
    }
}

#[test]
fn test_reads_log_written_by_browser_client() {
    let mut kv = MemoryStore::new();
    kv.set(
        LOG_KEY,
        r#"[{"timestamp":"2025-09-01T07:06:12.345Z","status":"Late","mode":"Face Scan","time":"09:06"},
            {"timestamp":"2025-08-29T06:58:00.000Z","status":"Present","mode":"QR","time":"08:58"}]"#,
    )
    .unwrap();

    let store = AttendanceLogStore::new(kv);
    let log = store.read_all();
    assert_eq!(log.len(), 2);
    assert_eq!(log.entries()[0].status, AttendanceStatus::Late);
    assert_eq!(log.entries()[0].display_time, "09:06");
    assert_eq!(log.entries()[1].mode, "QR");
    assert_eq!(log.entries()[0].timestamp_iso(), "2025-09-01T07:06:12.345Z");
}

#[test]
fn test_clear_is_idempotent() {
    let mut store = AttendanceLogStore::new(MemoryStore::new());
    store.clear();
    assert!(store.read_all().is_empty());

    store.append(event(0, "QR"));
    store.clear();
    store.clear();
    assert!(store.read_all().is_empty());
    assert_eq!(store.store().get(LOG_KEY).unwrap(), None);
}

#[test]
fn test_quota_exceeded_keeps_previous_log() {
    LazyLock::force(&TEST_LOGGING);
    let mut store = AttendanceLogStore::new(MemoryStore::with_quota(150));

    store.try_append(event(0, "QR")).expect("first entry fits");

    let err = store.try_append(event(1, "QR")).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { limit: 150, .. }));

    // The best-effort variant swallows the same failure.
    store.append(event(2, "QR"));

    let log = store.read_all();
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].timestamp, event(0, "QR").timestamp);
}

#[test]
fn test_sqlite_log_survives_reopen() {
    let db_path = setup_test_db("log_survives_reopen");

    {
        let mut store = AttendanceLogStore::new(DbPool::new(&db_path).expect("open db"));
        store.append(event(0, "A"));
        store.append(event(1, "B"));
    }

    let store = AttendanceLogStore::new(DbPool::new(&db_path).expect("reopen db"));
    let binding = store.read_all();
    let modes: Vec<&str> = binding.iter().map(|e| e.mode.as_str()).collect();
    assert_eq!(modes, ["B", "A"]);
}

#[test]
fn test_try_append_returns_written_log() {
    let mut store = AttendanceLogStore::new(DbPool::in_memory().expect("in-memory db"));
    store.append(event(0, "A"));

    let written = store.try_append(event(1, "B")).expect("write succeeds");
    assert_eq!(written, store.read_all());
    assert_eq!(written.len(), 2);
}

#[test]
fn test_swallowed_write_failure_is_logged() {
    let mut store = AttendanceLogStore::new(MemoryStore::with_quota(150));
    store.append(event(0, "QR"));

    let ((), logs) = capture_logs(|| store.append(event(1, "QR")));

    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("could not save attendance log"), "logs: {logs}");
    assert!(logs.contains("quota exceeded"), "logs: {logs}");
    assert_eq!(store.read_all().len(), 1);
}

#[test]
fn test_corrupted_log_read_is_logged() {
    let mut kv = MemoryStore::new();
    kv.set(LOG_KEY, "{not json").unwrap();
    let store = AttendanceLogStore::new(kv);

    let (log, logs) = capture_logs(|| store.read_all());

    assert!(log.is_empty());
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("treating as empty"), "logs: {logs}");
}

#[test]
fn test_clean_append_logs_no_warning() {
    let mut store = AttendanceLogStore::new(MemoryStore::new());

    let ((), logs) = capture_logs(|| store.append(event(0, "QR")));

    assert!(!logs.contains("WARN"), "logs: {logs}");
}

#[test]
fn test_unopenable_database_falls_back_to_memory() {
    let db_path = std::env::temp_dir()
        .join("campus360_missing_dir")
        .join("nested")
        .join("x.sqlite");
    let db_path = db_path.to_string_lossy().to_string();

    let (kv, logs) = capture_logs(|| open_or_memory(&db_path));
    assert!(logs.contains("using in-memory store"), "logs: {logs}");

    let mut store = AttendanceLogStore::new(kv);
    store.append(event(0, "QR"));
    assert_eq!(store.read_all().len(), 1);
    assert!(!std::path::Path::new(&db_path).exists());
}
