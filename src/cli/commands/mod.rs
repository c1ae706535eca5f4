pub mod calendar;
pub mod config;
pub mod export;
pub mod init;
pub mod progress;
pub mod status;
