pub mod clear;
pub mod log;
pub mod note;
pub mod scan;
