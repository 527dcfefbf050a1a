//! Attendance core: cutoff classification, the bounded attendance log and
//! the scan-recording workflow that ties them together.

pub mod classifier;
pub mod clock;
pub mod event;
pub mod recorder;
pub mod store;

pub use classifier::{AttendanceStatus, CutoffPolicy, DEFAULT_CUTOFF, classify};
pub use clock::{Clock, FixedClock, SystemClock};
pub use event::{AttendanceEvent, DEFAULT_MODE};
pub use recorder::AttendanceRecorder;
pub use store::{AttendanceLog, AttendanceLogStore, LOG_CAPACITY, LOG_KEY};
