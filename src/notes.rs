//! Free-text notes persisted per id under `campus_note_<id>`.

use crate::db::KeyValueStore;
use crate::errors::StoreError;
use tracing::warn;

const NOTE_PREFIX: &str = "campus_note";

/// Storage key for note `id`; a blank id maps to the bare prefix.
pub fn note_key(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        NOTE_PREFIX.to_string()
    } else {
        format!("{NOTE_PREFIX}_{id}")
    }
}

pub struct NoteStore<S> {
    store: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&mut self, id: &str, text: &str) -> Result<(), StoreError> {
        self.store.set(&note_key(id), text)
    }

    /// Saved text, or an empty string when nothing is stored or the read fails.
    pub fn load(&self, id: &str) -> String {
        match self.store.get(&note_key(id)) {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, id, "could not load note");
                String::new()
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.remove(&note_key(id))
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
