use crate::attendance::{AttendanceEvent, AttendanceRecorder, Clock};
use crate::config::Config;
use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, toast};
use crate::utils::colors::paint_status;

/// High-level business logic for the `scan` command.
pub struct ScanLogic;

impl ScanLogic {
    /// Record one scan with the configured cutoff and default label, then
    /// show the toast, the status badge and the alert line.
    pub fn apply<S: KeyValueStore, C: Clock>(
        store: S,
        clock: C,
        cfg: &Config,
        mode: Option<&str>,
    ) -> AppResult<AttendanceEvent> {
        let mut recorder = AttendanceRecorder::with_clock(store, clock)
            .policy(cfg.cutoff_policy()?)
            .default_mode(cfg.default_mode.clone());

        let event = recorder.record_scan(mode);

        toast(format!(
            "{} → {} at {}",
            event.mode, event.status, event.display_time
        ));
        println!("Today's status: {}", paint_status(event.status));
        info(format!(
            "Attendance {} recorded at {} via {}",
            event.status, event.display_time, event.mode
        ));

        Ok(event)
    }
}
