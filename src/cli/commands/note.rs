use crate::cli::parser::{Commands, NoteAction};
use crate::config::Config;
use crate::core::note::NoteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { action } = cmd {
        let mut pool = DbPool::new(&cfg.database_path())?;

        match action {
            NoteAction::Save { id, text } => {
                NoteLogic::save(&mut pool, id, text);
            }
            NoteAction::Show { id } => NoteLogic::show(&mut pool, id),
            NoteAction::Del { id } => NoteLogic::delete(&mut pool, id),
        }
    }
    Ok(())
}
