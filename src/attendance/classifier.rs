use chrono::{DateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default cutoff: 09:05:00.000 local time.
pub const DEFAULT_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(9, 5, 0) {
    Some(t) => t,
    None => panic!("invalid default cutoff"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
        }
    }

    pub fn is_late(&self) -> bool {
        matches!(self, AttendanceStatus::Late)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cutoff per calendar day. No weekend, holiday or timetable awareness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffPolicy {
    cutoff: NaiveTime,
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl CutoffPolicy {
    pub fn new(cutoff: NaiveTime) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    /// `Late` when `ts` is strictly after the cutoff on its own local
    /// calendar day, `Present` otherwise (exactly at the cutoff included).
    pub fn classify<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> AttendanceStatus {
        let local = ts.naive_local();
        let cutoff = local.date().and_time(self.cutoff);

        if local > cutoff {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }
}

/// Classify `ts` against the default 09:05 cutoff.
pub fn classify<Tz: TimeZone>(ts: &DateTime<Tz>) -> AttendanceStatus {
    CutoffPolicy::default().classify(ts)
}
