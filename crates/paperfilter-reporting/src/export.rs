use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use tracing::info;

use paperfilter_core::{KeywordHit, MatchedPaper};

use crate::ExportError;

/// Column headers shared by every export format, in output order.
const HEADERS: [&str; 8] = [
    "Paper Title",
    "Classification Info",
    "Link",
    "Publication Category",
    "Publication Type",
    "Publication Level",
    "Match Type",
    "Keywords Hit",
];

/// One row of the exported report: a matched paper joined with its keyword
/// hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub comment: String,
    pub url: String,
    pub venue: String,
    pub venue_type: String,
    pub level: String,
    pub match_kind: String,
    /// Comma-joined hit terms, in keyword-list order. Empty when no keyword
    /// hit the title.
    pub keywords_hit: String,
}

impl ReportRow {
    fn fields(&self) -> [&str; 8] {
        [
            &self.title,
            &self.comment,
            &self.url,
            &self.venue,
            &self.venue_type,
            &self.level,
            &self.match_kind,
            &self.keywords_hit,
        ]
    }
}

/// Join the two parallel result collections into report rows, preserving
/// pipeline order.
pub fn build_report_rows(matches: &[MatchedPaper], hits: &[KeywordHit]) -> Vec<ReportRow> {
    matches
        .iter()
        .zip(hits)
        .map(|(m, hit)| ReportRow {
            title: m.paper.title.clone(),
            comment: m.paper.comment.clone(),
            url: m.paper.pdf_url.clone(),
            venue: m.venue.full_name.clone(),
            venue_type: m.venue.venue_type.as_str().to_string(),
            level: m.venue.category.clone(),
            match_kind: m.kind.as_str().to_string(),
            keywords_hit: hit
                .matched_keywords
                .iter()
                .map(|kw| kw.term.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Default export path: `analysis_results_<YYYYmmdd_HHMMSS>.<ext>` inside
/// `dir`, so repeated runs never clobber or lock each other's output.
pub fn timestamped_path(dir: &Path, format: ExportFormat) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("analysis_results_{}.{}", stamp, format.extension()))
}

/// Write the report rows to `path` in the given format.
pub fn export_results(
    rows: &[ReportRow],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Xlsx => export_xlsx(rows, path)?,
        ExportFormat::Csv => write_text(path, &render_csv(rows))?,
        ExportFormat::Json => write_text(path, &serde_json::to_string_pretty(rows)?)?,
    }
    info!(path = %path.display(), rows = rows.len(), "report exported");
    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn export_xlsx(rows: &[ReportRow], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Analysis Results")?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, value) in row.fields().iter().enumerate() {
            sheet.write_string((i + 1) as u32, col as u16, *value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = HEADERS.join(",");
    out.push('\n');
    for row in rows {
        let escaped: Vec<String> = row.fields().iter().map(|f| csv_escape(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperfilter_core::{
        Keyword, MatchKind, PaperRecord, ReferenceVenue, VenueType,
    };

    fn sample() -> (Vec<MatchedPaper>, Vec<KeywordHit>) {
        let paper = PaperRecord {
            title: "Neural Pruning, Revisited".to_string(),
            authors: "A. Author".to_string(),
            comment: "Comments: Accepted at CVPR 2025".to_string(),
            pdf_url: "https://arxiv.org/pdf/2501.00001".to_string(),
        };
        let venue = ReferenceVenue {
            short_name: "CVPR".to_string(),
            full_name: "IEEE/CVF Conference on Computer Vision and Pattern Recognition"
                .to_string(),
            category: "A".to_string(),
            venue_type: VenueType::Conference,
        };
        let matches = vec![MatchedPaper {
            paper: paper.clone(),
            venue,
            kind: MatchKind::ConferenceAbbr,
        }];
        let hits = vec![KeywordHit {
            paper,
            matched_keywords: vec![Keyword::new("neural"), Keyword::new("pruning")],
        }];
        (matches, hits)
    }

    #[test]
    fn test_build_report_rows() {
        let (matches, hits) = sample();
        let rows = build_report_rows(&matches, &hits);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].match_kind, "Conference Abbr Match");
        assert_eq!(rows[0].level, "A");
        assert_eq!(rows[0].keywords_hit, "neural, pruning");
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_csv_quotes_title_with_comma() {
        let (matches, hits) = sample();
        let rows = build_report_rows(&matches, &hits);
        let csv = render_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), HEADERS.join(","));
        let data = lines.next().unwrap();
        assert!(data.starts_with("\"Neural Pruning, Revisited\","));
        assert!(data.ends_with("\"neural, pruning\""));
    }

    #[test]
    fn test_json_export_roundtrip() {
        let (matches, hits) = sample();
        let rows = build_report_rows(&matches, &hits);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        export_results(&rows, ExportFormat::Json, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["venue_type"], "Conference");
        assert_eq!(parsed[0]["keywords_hit"], "neural, pruning");
    }

    #[test]
    fn test_xlsx_export_writes_file() {
        let (matches, hits) = sample();
        let rows = build_report_rows(&matches, &hits);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        export_results(&rows, ExportFormat::Xlsx, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("XLSX").unwrap(), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::parse("json").unwrap(), ExportFormat::Json);
        assert!(matches!(
            ExportFormat::parse("pdf"),
            Err(ExportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_timestamped_path_shape() {
        let path = timestamped_path(Path::new("/tmp"), ExportFormat::Xlsx);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("analysis_results_"));
        assert!(name.ends_with(".xlsx"));
        // analysis_results_YYYYmmdd_HHMMSS.xlsx
        assert_eq!(name.len(), "analysis_results_".len() + 15 + ".xlsx".len());
    }
}
