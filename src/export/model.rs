// src/export/model.rs

use crate::attendance::AttendanceEvent;
use serde::Serialize;

/// Flat view of an attendance event for export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub timestamp: String,
    pub status: String,
    pub mode: String,
    pub time: String,
}

impl From<&AttendanceEvent> for EventExport {
    fn from(ev: &AttendanceEvent) -> Self {
        Self {
            timestamp: ev.timestamp_iso(),
            status: ev.status.as_str().to_string(),
            mode: ev.mode.clone(),
            time: ev.display_time.clone(),
        }
    }
}

/// CSV header row.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["timestamp", "status", "mode", "time"]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.status.clone(),
        e.mode.clone(),
        e.time.clone(),
    ]
}

/// Header followed by one row per event.
pub(crate) fn events_to_table(events: &[EventExport]) -> Vec<Vec<String>> {
    let mut rows = vec![get_headers().into_iter().map(String::from).collect()];
    rows.extend(events.iter().map(event_to_row));
    rows
}
