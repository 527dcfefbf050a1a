//! Bounded, newest-first attendance log persisted under a single key.
//!
//! Storage faults never reach the caller of `append`, `read_all` or
//! `clear`. The fallible halves (`load`, `try_append`) stay public so the
//! degradation is explicit and testable.

use super::event::AttendanceEvent;
use crate::db::KeyValueStore;
use crate::errors::StoreError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Storage key of the persisted log.
pub const LOG_KEY: &str = "campus_attendance_log_v1";

/// Maximum number of events kept.
pub const LOG_CAPACITY: usize = 200;

/// Ordered sequence of events, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceLog(Vec<AttendanceEvent>);

impl AttendanceLog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert at index 0, dropping whatever falls past [`LOG_CAPACITY`].
    pub fn push_front(&mut self, event: AttendanceEvent) {
        self.0.insert(0, event);
        self.0.truncate(LOG_CAPACITY);
    }

    pub fn latest(&self) -> Option<&AttendanceEvent> {
        self.0.first()
    }

    pub fn entries(&self) -> &[AttendanceEvent] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttendanceEvent> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<AttendanceEvent> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AttendanceLog {
    type Item = &'a AttendanceEvent;
    type IntoIter = std::slice::Iter<'a, AttendanceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub struct AttendanceLogStore<S> {
    store: S,
}

impl<S: KeyValueStore> AttendanceLogStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the persisted log. Absence is an empty log; a value that is not a
    /// JSON array of events is an error.
    pub fn load(&self) -> Result<AttendanceLog, StoreError> {
        match self.store.get(LOG_KEY)? {
            None => Ok(AttendanceLog::empty()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                key: LOG_KEY.to_string(),
                source,
            }),
        }
    }

    /// Full log, newest first. Any read or parse fault yields an empty log.
    pub fn read_all(&self) -> AttendanceLog {
        match self.load() {
            Ok(log) => log,
            Err(e) => {
                warn!(error = %e, "attendance log unreadable, treating as empty");
                AttendanceLog::empty()
            }
        }
    }

    /// Prepend `event`, cap the log and write it back in one `set`.
    /// Returns the log as written.
    pub fn try_append(&mut self, event: AttendanceEvent) -> Result<AttendanceLog, StoreError> {
        let mut log = self.read_all();
        log.push_front(event);

        let raw = serde_json::to_string(&log).map_err(|source| StoreError::Serialize {
            key: LOG_KEY.to_string(),
            source,
        })?;
        self.store.set(LOG_KEY, &raw)?;

        debug!(entries = log.len(), "attendance log written");
        Ok(log)
    }

    /// Best-effort append: a failed write is logged and dropped.
    pub fn append(&mut self, event: AttendanceEvent) {
        if let Err(e) = self.try_append(event) {
            warn!(error = %e, "could not save attendance log");
        }
    }

    /// Remove the persisted log. Clearing an empty log is a no-op.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(LOG_KEY) {
            warn!(error = %e, "could not clear attendance log");
        }
    }
}
