#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Binary in test mode with HOME pointed at a scratch dir, so the user's
/// `~/.campus360` is never read or written.
pub fn c360() -> Command {
    let mut cmd = cargo_bin_cmd!("campus360");
    cmd.env("HOME", test_home("default"))
        .env_remove("RUST_LOG")
        .arg("--test");
    cmd
}

/// Scratch HOME directory under the system temp dir.
pub fn test_home(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("campus360_home_{}", name));
    fs::create_dir_all(&dir).expect("create test home");
    dir
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_campus360.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Local instant on 2025-09-01 at the given wall-clock time.
pub fn local_at(h: u32, m: u32, s: u32, ms: i64) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 9, 1, h, m, s)
        .single()
        .expect("unambiguous local time")
        + TimeDelta::milliseconds(ms)
}

/// Initialize a DB via the CLI without touching the user's config file.
pub fn init_db(db_path: &str) {
    c360()
        .args(["--db", db_path, "init"])
        .assert()
        .success();
}

#[derive(Clone, Default)]
pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result together with
/// everything that was logged while it ran.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let writer = CapturedWriter::default();
    let sink = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}
