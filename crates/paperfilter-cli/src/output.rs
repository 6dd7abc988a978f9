use std::io::Write;

use owo_colors::OwoColorize;
use paperfilter_core::RunStats;
use paperfilter_reporting::ReportRow;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

const BANNER_WIDTH: usize = 120;

const TITLE_COL: usize = 40;
const VENUE_COL: usize = 48;
const TYPE_COL: usize = 12;
const LEVEL_COL: usize = 7;

/// Truncate to `max` characters, appending "..." when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s)
}

fn cell(s: &str, width: usize) -> String {
    pad(&truncate(s, width.saturating_sub(2)), width)
}

/// Print the full analysis report: the venue-match table, the keyword-hit
/// table, and summary counts.
pub fn print_report(
    w: &mut dyn Write,
    rows: &[ReportRow],
    stats: RunStats,
    color: ColorMode,
) -> std::io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(BANNER_WIDTH);

    writeln!(w, "\n{}", banner)?;
    writeln!(w, "{:^width$}", "Academic Paper Publication Analysis Report", width = BANNER_WIDTH)?;
    writeln!(w, "{}\n", banner)?;

    writeln!(
        w,
        "[Publication Matching] Venues identified from Comments annotations:\n"
    )?;
    if rows.is_empty() {
        writeln!(w, "  No matches found")?;
    } else {
        writeln!(w, "Found matched records: {}\n", rows.len())?;
        writeln!(
            w,
            "{}{}{}{}{}",
            pad("Paper Title", TITLE_COL),
            pad("Publication Category", VENUE_COL),
            pad("Type", TYPE_COL),
            pad("Level", LEVEL_COL),
            "Match Type"
        )?;
        writeln!(w, "{}", rule)?;
        for row in rows {
            writeln!(
                w,
                "{}{}{}{}{}",
                cell(&row.title, TITLE_COL),
                cell(&row.venue, VENUE_COL),
                cell(&row.venue_type, TYPE_COL),
                cell(&row.level, LEVEL_COL),
                row.match_kind
            )?;
        }
    }

    writeln!(w, "\n{}\n", rule)?;
    writeln!(
        w,
        "[Keyword Relevance] Title hits against the research keyword list:\n"
    )?;

    let with_hits: Vec<&ReportRow> = rows.iter().filter(|r| !r.keywords_hit.is_empty()).collect();
    writeln!(
        w,
        "  Total records: {}, Records with keyword hits: {}\n",
        rows.len(),
        with_hits.len()
    )?;
    if with_hits.is_empty() {
        writeln!(w, "  No keyword hits found")?;
    } else {
        writeln!(
            w,
            "{}{}{}{}{}",
            pad("Paper Title", TITLE_COL),
            pad("Publication Category", VENUE_COL),
            pad("Type", TYPE_COL),
            pad("Level", LEVEL_COL),
            "Keywords Hit"
        )?;
        writeln!(w, "{}", rule)?;
        for row in &with_hits {
            writeln!(
                w,
                "{}{}{}{}{}",
                cell(&row.title, TITLE_COL),
                cell(&row.venue, VENUE_COL),
                cell(&row.venue_type, TYPE_COL),
                cell(&row.level, LEVEL_COL),
                row.keywords_hit
            )?;
        }
    }

    writeln!(w, "\n{}", banner)?;
    print_summary(w, stats, color)
}

fn print_summary(w: &mut dyn Write, stats: RunStats, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{} records, {} matched, {} with keyword hits",
            stats.total,
            stats.matched.green(),
            stats.with_keyword_hits.cyan()
        )
    } else {
        writeln!(
            w,
            "{} records, {} matched, {} with keyword hits",
            stats.total, stats.matched, stats.with_keyword_hits
        )
    }
}
