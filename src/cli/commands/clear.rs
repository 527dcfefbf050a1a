use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { all, force } = cmd {
        let prompt = if *all {
            "Delete ALL stored data (attendance log and notes)? This action is irreversible."
        } else {
            "Clear the attendance log? This action is irreversible."
        };

        if !*force && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database_path())?;

        if *all {
            ClearLogic::clear_all(&mut pool)?;
        } else {
            ClearLogic::clear_log(&mut pool);
        }
    }

    Ok(())
}
