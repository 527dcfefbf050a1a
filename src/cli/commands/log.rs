use crate::attendance::AttendanceLogStore;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::open_or_memory;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { json, limit } = cmd {
        let store = open_or_memory(&cfg.database_path());
        let log = AttendanceLogStore::new(store).read_all();
        LogLogic::print_log(&log, *limit, *json)?;
    }
    Ok(())
}
