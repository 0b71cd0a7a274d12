pub mod accounting;
pub mod backup;
pub mod config;
pub mod export;
pub mod log;
pub mod lunch;
pub mod projection;
pub mod weekly;
pub mod worklog;

pub use worklog::Worklog;
