// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::events_to_table;
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(events)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv_rows(file, &events_to_table(events))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write arbitrary rows as CSV. A field is quoted only when it contains a
/// quote, a comma, `\n` or `\r`; embedded quotes are doubled. Quoting `\r`
/// keeps the output readable by CSV readers that treat it as a record end.
/// Rows may have different lengths.
pub fn write_csv_rows<W: Write>(out: W, rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
