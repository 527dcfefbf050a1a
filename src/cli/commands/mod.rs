pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod note;
pub mod scan;
pub mod today;
