//! Spreadsheet loading for the paper pipeline.
//!
//! Three loaders, one per input the core consumes: paper rows (headerless
//! workbook), the venue taxonomy (header row with required columns), and the
//! keyword list. Loading failures here are fatal configuration problems and
//! abort before any classification runs; blank or partial data rows are
//! skipped, not errors.

use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use thiserror::Error;
use tracing::info;

use paperfilter_core::{Keyword, PaperRecord, ReferenceVenue, VenueType};

/// Required header of the taxonomy worksheet: the venue's short name.
pub const COL_SHORT_NAME: &str = "Journal Name";
/// Required header of the taxonomy worksheet: the venue's full name.
pub const COL_FULL_NAME: &str = "Full Name of the Journal";
/// Optional header: "Journal" or "Conference".
pub const COL_TYPE: &str = "Type";
/// Optional header: quality grade, only "A"/"B"/"C" are kept.
pub const COL_LEVEL: &str = "Level";
/// Required header of the keywords worksheet.
pub const COL_KEYWORDS: &str = "keyword-English";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no worksheets")]
    EmptyWorkbook,
    #[error("worksheet not found: {0}")]
    MissingSheet(String),
    #[error("required column not found: {0}")]
    MissingColumn(String),
}

/// List the worksheet names of an Excel workbook.
pub fn list_sheets(path: &Path) -> Result<Vec<String>, IngestError> {
    let workbook = open_workbook_auto(path)?;
    Ok(workbook.sheet_names().to_vec())
}

fn open_sheet(path: &Path, sheet: &str) -> Result<Range<Data>, IngestError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|n| n == sheet) {
        return Err(IngestError::MissingSheet(sheet.to_string()));
    }
    Ok(workbook.worksheet_range(sheet)?)
}

fn open_first_sheet(path: &Path) -> Result<Range<Data>, IngestError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::EmptyWorkbook)?;
    Ok(workbook.worksheet_range(&first)?)
}

/// Text content of a cell, trimmed. Numeric cells are rendered as text
/// (integral floats without the trailing ".0"); empty and error cells are
/// `None`.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn cell_at(row: &[Data], idx: usize) -> String {
    row.get(idx).and_then(cell_text).unwrap_or_default()
}

/// Find a header column by exact (trimmed) name.
fn column_index(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|c| cell_text(c).as_deref() == Some(name))
}

/// Load paper rows from the first worksheet of a headerless workbook.
/// Column order: title, authors, comment, pdf url. Rows with neither a
/// title nor a comment are skipped.
pub fn load_papers(path: &Path) -> Result<Vec<PaperRecord>, IngestError> {
    let range = open_first_sheet(path)?;
    let mut records = Vec::new();
    for row in range.rows() {
        let title = cell_at(row, 0);
        let comment = cell_at(row, 2);
        if title.is_empty() && comment.is_empty() {
            continue;
        }
        records.push(PaperRecord {
            title,
            authors: cell_at(row, 1),
            comment,
            pdf_url: cell_at(row, 3),
        });
    }
    info!(path = %path.display(), count = records.len(), "loaded paper records");
    Ok(records)
}

/// Load the venue taxonomy from the named worksheet. The first row is the
/// header; short-name and full-name columns are required, type and level
/// are optional. Grades other than A/B/C are normalized to empty.
pub fn load_venues(path: &Path, sheet: &str) -> Result<Vec<ReferenceVenue>, IngestError> {
    let range = open_sheet(path, sheet)?;
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| IngestError::MissingColumn(COL_SHORT_NAME.to_string()))?;

    let short_idx = column_index(header, COL_SHORT_NAME)
        .ok_or_else(|| IngestError::MissingColumn(COL_SHORT_NAME.to_string()))?;
    let full_idx = column_index(header, COL_FULL_NAME)
        .ok_or_else(|| IngestError::MissingColumn(COL_FULL_NAME.to_string()))?;
    let type_idx = column_index(header, COL_TYPE);
    let level_idx = column_index(header, COL_LEVEL);

    let mut venues = Vec::new();
    for row in rows {
        let short_name = cell_at(row, short_idx);
        let full_name = cell_at(row, full_idx);
        if short_name.is_empty() && full_name.is_empty() {
            continue;
        }
        let venue_type = type_idx
            .map(|i| VenueType::parse(&cell_at(row, i)))
            .unwrap_or(VenueType::Unknown);
        let level = level_idx.map(|i| cell_at(row, i)).unwrap_or_default();
        let category = match level.as_str() {
            "A" | "B" | "C" => level,
            _ => String::new(),
        };
        venues.push(ReferenceVenue {
            short_name,
            full_name,
            category,
            venue_type,
        });
    }
    info!(path = %path.display(), sheet, count = venues.len(), "loaded venue taxonomy");
    Ok(venues)
}

/// Load the keyword list from the named worksheet. Cells may hold several
/// comma-separated terms; terms are trimmed, empties dropped, and duplicates
/// removed case-insensitively while preserving first-seen order.
pub fn load_keywords(path: &Path, sheet: &str) -> Result<Vec<Keyword>, IngestError> {
    let range = open_sheet(path, sheet)?;
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| IngestError::MissingColumn(COL_KEYWORDS.to_string()))?;
    let kw_idx = column_index(header, COL_KEYWORDS)
        .ok_or_else(|| IngestError::MissingColumn(COL_KEYWORDS.to_string()))?;

    let mut seen: Vec<String> = Vec::new();
    let mut keywords = Vec::new();
    for row in rows {
        let cell = cell_at(row, kw_idx);
        for term in cell.split(',') {
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            let lowered = term.to_lowercase();
            if seen.contains(&lowered) {
                continue;
            }
            seen.push(lowered);
            keywords.push(Keyword::new(term));
        }
    }
    info!(path = %path.display(), sheet, count = keywords.len(), "loaded keywords");
    Ok(keywords)
}
