use crate::db::KeyValueStore;
use crate::notes::NoteStore;
use crate::ui::messages::{info, toast, warning};

pub struct NoteLogic;

impl NoteLogic {
    /// Save a note. A failed write is reported, not raised.
    pub fn save<S: KeyValueStore>(store: S, id: &str, text: &str) -> bool {
        let mut notes = NoteStore::new(store);
        match notes.save(id, text) {
            Ok(()) => {
                toast("Note saved");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "could not save note");
                warning("Unable to save note");
                false
            }
        }
    }

    pub fn show<S: KeyValueStore>(store: S, id: &str) {
        let text = NoteStore::new(store).load(id);
        if text.is_empty() {
            info(format!("No note saved for '{id}'."));
        } else {
            println!("{text}");
        }
    }

    pub fn delete<S: KeyValueStore>(store: S, id: &str) {
        let mut notes = NoteStore::new(store);
        match notes.remove(id) {
            Ok(()) => toast("Note deleted"),
            Err(e) => {
                tracing::warn!(error = %e, id, "could not delete note");
                warning("Unable to delete note");
            }
        }
    }
}
