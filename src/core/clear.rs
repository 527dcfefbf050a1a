use crate::attendance::AttendanceLogStore;
use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::ui::messages::toast;

pub struct ClearLogic;

impl ClearLogic {
    /// Reset the attendance log. Never fails; see `AttendanceLogStore::clear`.
    pub fn clear_log<S: KeyValueStore>(store: S) {
        let mut log = AttendanceLogStore::new(store);
        log.clear();
        toast("Attendance log cleared");
    }

    /// Wipe every stored key: log, notes and anything else.
    pub fn clear_all<S: KeyValueStore>(mut store: S) -> AppResult<()> {
        store.clear()?;
        toast("Local storage cleared");
        Ok(())
    }
}
