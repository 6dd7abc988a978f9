//! Report rows and file export for the classification results.

use thiserror::Error;

pub mod export;

pub use export::{
    ExportFormat, ReportRow, build_report_rows, export_results, timestamped_path,
};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}
