// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StatusExport;
use crate::models::shift_summary::ShiftSummary;
use crate::ui::messages::warning;
use log::info;
use std::path::Path;

/// High-level export of a status report.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(
        summaries: &[ShiftSummary],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if summaries.is_empty() {
            warning("No shifts found for selected range.");
            return Ok(());
        }

        let rows: Vec<StatusExport> = summaries.iter().map(StatusExport::from).collect();
        info!("exporting {} rows as {}", rows.len(), format.as_str());

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
