use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;
use paperfilter_core::{ConferenceMap, ReferenceIndex, config_file, run_pipeline};
use paperfilter_reporting::{ExportFormat, build_report_rows, export_results, timestamped_path};

const DEFAULT_VENUES_SHEET: &str = "Publications";
const DEFAULT_KEYWORDS_SHEET: &str = "Keywords";

/// Classify arXiv paper comment annotations against a venue taxonomy and tag
/// matched titles with research keywords
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the classification and keyword-tagging pipeline
    Analyze {
        /// Paper workbook (headerless rows: title, authors, comment, pdf url)
        #[arg(long)]
        papers: Option<PathBuf>,

        /// Reference workbook holding the venue and keyword worksheets
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Worksheet with the venue taxonomy
        #[arg(long)]
        venues_sheet: Option<String>,

        /// Worksheet with the keyword list
        #[arg(long)]
        keywords_sheet: Option<String>,

        /// Report file path (defaults to a timestamped name in the export
        /// directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format: xlsx, csv or json
        #[arg(long)]
        format: Option<String>,

        /// Print the report without writing a file
        #[arg(long)]
        no_export: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// TOML config file (defaults to the platform config cascade)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the worksheets of an Excel workbook
    Sheets {
        /// Path to the workbook
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Sheets { path } => sheets(&path),
        Command::Analyze {
            papers,
            reference,
            venues_sheet,
            keywords_sheet,
            output,
            format,
            no_export,
            no_color,
            config,
        } => analyze(AnalyzeArgs {
            papers,
            reference,
            venues_sheet,
            keywords_sheet,
            output,
            format,
            no_export,
            no_color,
            config,
        }),
    }
}

struct AnalyzeArgs {
    papers: Option<PathBuf>,
    reference: Option<PathBuf>,
    venues_sheet: Option<String>,
    keywords_sheet: Option<String>,
    output: Option<PathBuf>,
    format: Option<String>,
    no_export: bool,
    no_color: bool,
    config: Option<PathBuf>,
}

fn sheets(path: &Path) -> anyhow::Result<()> {
    let names = paperfilter_ingest::list_sheets(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    // Resolve configuration: CLI flags > config file > defaults
    let cfg = match &args.config {
        Some(path) => config_file::load_from_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => config_file::load_config(),
    };
    let files = cfg.files.unwrap_or_default();
    let sheets_cfg = cfg.sheets.unwrap_or_default();
    let export_cfg = cfg.export.unwrap_or_default();

    let papers_path = match args.papers.or_else(|| files.papers.map(PathBuf::from)) {
        Some(p) => p,
        None => bail!("no paper workbook given; pass --papers or set [files].papers"),
    };
    let reference_path = match args.reference.or_else(|| files.reference.map(PathBuf::from)) {
        Some(p) => p,
        None => bail!("no reference workbook given; pass --reference or set [files].reference"),
    };
    let venues_sheet = args
        .venues_sheet
        .or(sheets_cfg.venues)
        .unwrap_or_else(|| DEFAULT_VENUES_SHEET.to_string());
    let keywords_sheet = args
        .keywords_sheet
        .or(sheets_cfg.keywords)
        .unwrap_or_else(|| DEFAULT_KEYWORDS_SHEET.to_string());
    let format = ExportFormat::parse(
        args.format
            .or(export_cfg.format)
            .as_deref()
            .unwrap_or("xlsx"),
    )?;

    // Load inputs; a missing worksheet or column aborts before any
    // classification runs
    let records = paperfilter_ingest::load_papers(&papers_path)
        .with_context(|| format!("failed to load papers from {}", papers_path.display()))?;
    let venues = paperfilter_ingest::load_venues(&reference_path, &venues_sheet)
        .with_context(|| format!("failed to load venues from {}", reference_path.display()))?;
    let keywords = paperfilter_ingest::load_keywords(&reference_path, &keywords_sheet)
        .with_context(|| format!("failed to load keywords from {}", reference_path.display()))?;

    let index = ReferenceIndex::build(venues, ConferenceMap::builtin());
    let result = run_pipeline(&records, &index, &keywords);
    let rows = build_report_rows(&result.matches, &result.keyword_hits);

    let color = ColorMode(!args.no_color);
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    output::print_report(&mut w, &rows, result.stats, color)?;

    if !args.no_export {
        if rows.is_empty() {
            println!("\nNo results to save.");
        } else {
            let path = args.output.unwrap_or_else(|| {
                let dir = export_cfg
                    .directory
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                timestamped_path(&dir, format)
            });
            export_results(&rows, format, &path)
                .with_context(|| format!("failed to export report to {}", path.display()))?;
            println!("\nAnalysis results saved to: {}", path.display());
        }
    }

    Ok(())
}
