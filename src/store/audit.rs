//! Internal audit journal: one JSON line per mutating operation, kept in a
//! file next to the store (`work_log.json` → `work_log.journal`).

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn journal_path(store_path: &Path) -> PathBuf {
    store_path.with_extension("journal")
}

/// Append a line to the journal.
pub fn ttlog(store_path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let record = AuditRecord {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(journal_path(store_path))?;
    writeln!(file, "{}", serde_json::to_string(&record)?)?;

    Ok(())
}

/// Read every record; unreadable lines are skipped.
pub fn read_all(store_path: &Path) -> AppResult<Vec<AuditRecord>> {
    let path = journal_path(store_path);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
