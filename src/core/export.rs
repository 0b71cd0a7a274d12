//! Export of the stored entries to CSV or JSON.

use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::store::audit::ttlog;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io::BufRead;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported row; blank cells for missing fields.
#[derive(Debug, Clone, Serialize)]
pub struct EntryExport {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours_worked: Option<f64>,
    pub total_minutes: Option<i64>,
}

pub fn rows(store: &Store) -> Vec<EntryExport> {
    store
        .entries
        .iter()
        .map(|(date, e)| EntryExport {
            date: format_date(*date),
            start: e.start.map(format_time).unwrap_or_default(),
            end: e.end.map(format_time).unwrap_or_default(),
            hours_worked: e.hours_worked,
            total_minutes: e.total_minutes,
        })
        .collect()
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write every entry of `store` to `file`. Returns `false` when the user
    /// declined to overwrite an existing file.
    pub fn export(
        store: &Store,
        store_path: &Path,
        format: ExportFormat,
        file: &str,
        force: bool,
        input: &mut impl BufRead,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        if path.exists()
            && !force
            && !confirm(
                input,
                &format!("The file '{}' already exists. Overwrite?", path.display()),
            )?
        {
            info("Export cancelled: existing file not overwritten.");
            return Ok(false);
        }

        let data = rows(store);
        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
        }

        success(format!(
            "{} export completed: {} ({} entries)",
            format.as_str().to_uppercase(),
            path.display(),
            data.len()
        ));

        if let Err(e) = ttlog(
            store_path,
            "export",
            &path.to_string_lossy(),
            &format!("{} entries exported as {}", data.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(true)
    }
}

fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}

fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
