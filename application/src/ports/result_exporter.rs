//! Result exporter port

use crate::use_cases::run_draw::DrawOutcome;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a draw outcome
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize draw outcome: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sink for a finished draw.
///
/// Exporters write the assignment sheet (`full_name`, `group`) alongside the
/// original roster, mirroring the two-sheet workbook of the original tool.
/// Returns the paths written so the caller can report them.
pub trait ResultExporter {
    fn export(&self, outcome: &DrawOutcome) -> Result<Vec<PathBuf>, ExportError>;
}
