// src/export/logic.rs

use crate::attendance::AttendanceLog;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of the attendance log.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `log` (newest first) to `file`.
    ///
    /// Returns the number of exported events; an empty log writes nothing.
    pub fn export(
        log: &AttendanceLog,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if log.is_empty() {
            warning("No rows to export");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let events: Vec<EventExport> = log.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&events, &path)?,
            ExportFormat::Json => export_json(&events, &path)?,
        }

        Ok(events.len())
    }
}
