//! Unified application error type.
//! Every layer (store, core, cli, utils) returns AppError so that the
//! command boundary can decide in one place what is reported and what is fatal.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt work log store: {0}")]
    CorruptStore(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: '{0}'. Use HH:MM (24-hour format)")]
    InvalidTimeFormat(String),

    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid lunch break duration: '{0}'. Must be a number between 0 and 120 minutes")]
    InvalidLunchDuration(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No start time found for {0}. Please log start time first.")]
    MissingStart(String),

    #[error("No entry found for {0}")]
    EntryNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Errors that stop the interactive loop instead of being reported.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Json(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
