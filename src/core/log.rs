use crate::attendance::AttendanceLog;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, paint_status};
use crate::utils::table::{Column, Table};

pub struct LogLogic;

impl LogLogic {
    /// Print up to `limit` entries (newest first), as a table or as the raw
    /// persisted JSON layout.
    pub fn print_log(log: &AttendanceLog, limit: Option<usize>, json: bool) -> AppResult<()> {
        let shown = limit.unwrap_or(log.len()).min(log.len());
        let entries = &log.entries()[..shown];

        if json {
            println!("{}", serde_json::to_string_pretty(entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            info("Attendance log is empty.");
            return Ok(());
        }

        println!("📜 Attendance log:\n");

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("Recorded"),
            Column::new("Time"),
            Column::new("Status"),
            Column::new("Mode"),
        ]);

        for (i, ev) in entries.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                ev.local_timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
                colorize_optional(&ev.display_time),
                paint_status(ev.status),
                ev.mode.clone(),
            ]);
        }

        print!("{}", table.render());

        if shown < log.len() {
            info(format!("Showing {} of {} entries.", shown, log.len()));
        }

        Ok(())
    }
}
