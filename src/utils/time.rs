//! Time utilities: parsing HH:MM, display formatting, pinning a time of day.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime, TimeZone};

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Two-digit hour and minute, e.g. `08:07`.
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Short weekday, month and day with the year, e.g. `Mon, Sep 1, 2025`.
pub fn format_date_long<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%a, %b %-d, %Y").to_string()
}

/// Today's date at `time`, local. Fails only when that wall-clock time does
/// not exist today (DST gap).
pub fn today_at(time: NaiveTime) -> AppResult<DateTime<Local>> {
    let naive = Local::now().date_naive().and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{time} does not exist today")))
}
