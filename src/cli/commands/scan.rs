use crate::attendance::{FixedClock, SystemClock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::db::open_or_memory;
use crate::errors::AppResult;
use crate::utils::time::{parse_optional_time, today_at};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { mode, at } = cmd {
        let at = parse_optional_time(at.as_ref())?;
        // A missing database never blocks a scan; the result is still shown.
        let store = open_or_memory(&cfg.database_path());

        match at {
            Some(t) => {
                let clock = FixedClock(today_at(t)?);
                ScanLogic::apply(store, clock, cfg, mode.as_deref())?;
            }
            None => {
                ScanLogic::apply(store, SystemClock, cfg, mode.as_deref())?;
            }
        }
    }

    Ok(())
}
