use super::classifier::CutoffPolicy;
use super::clock::{Clock, SystemClock};
use super::event::{AttendanceEvent, DEFAULT_MODE};
use super::store::{AttendanceLog, AttendanceLogStore};
use crate::db::KeyValueStore;
use tracing::info;

/// Records one scan: read the clock, classify, build the event, append it,
/// hand it back for display.
pub struct AttendanceRecorder<S, C = SystemClock> {
    log: AttendanceLogStore<S>,
    clock: C,
    policy: CutoffPolicy,
    default_mode: String,
}

impl<S: KeyValueStore> AttendanceRecorder<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> AttendanceRecorder<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            log: AttendanceLogStore::new(store),
            clock,
            policy: CutoffPolicy::default(),
            default_mode: DEFAULT_MODE.to_string(),
        }
    }

    pub fn policy(mut self, policy: CutoffPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Label used when `record_scan` gets no usable mode. A blank label is
    /// ignored.
    pub fn default_mode(mut self, mode: impl Into<String>) -> Self {
        let mode = mode.into();
        if !mode.trim().is_empty() {
            self.default_mode = mode.trim().to_string();
        }
        self
    }

    /// Missing or blank `mode` falls back to the default label; nothing is
    /// ever rejected.
    pub fn record_scan(&mut self, mode: Option<&str>) -> AttendanceEvent {
        let now = self.clock.now();
        let status = self.policy.classify(&now);

        let mode = mode
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.default_mode.as_str())
            .to_string();

        let event = AttendanceEvent::new(now, status, mode);
        self.log.append(event.clone());

        info!(status = %event.status, mode = %event.mode, "attendance recorded");
        event
    }

    pub fn read_log(&self) -> AttendanceLog {
        self.log.read_all()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn log_store(&self) -> &AttendanceLogStore<S> {
        &self.log
    }

    pub fn into_store(self) -> S {
        self.log.into_inner()
    }
}
