use crate::attendance::AttendanceLogStore;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open_or_memory;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_or_memory(&cfg.database_path());
        let log = AttendanceLogStore::new(store).read_all();
        ExportLogic::export(&log, *format, file, *force)?;
    }
    Ok(())
}
