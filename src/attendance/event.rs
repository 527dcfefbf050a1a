use super::classifier::AttendanceStatus;
use crate::utils::time::format_time;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Label used when a scan carries no mode of its own.
pub const DEFAULT_MODE: &str = "QR/Face Scan";

/// One recorded scan. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub mode: String,
    /// Local `HH:MM` at creation; display only.
    #[serde(rename = "time")]
    pub display_time: String,
}

impl AttendanceEvent {
    pub fn new(at: DateTime<Local>, status: AttendanceStatus, mode: impl Into<String>) -> Self {
        Self {
            timestamp: at.with_timezone(&Utc),
            status,
            mode: mode.into(),
            display_time: format_time(&at),
        }
    }

    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// ISO-8601 UTC string with milliseconds, as persisted.
    pub fn timestamp_iso(&self) -> String {
        iso_millis::format(&self.timestamp)
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
