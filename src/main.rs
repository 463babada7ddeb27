use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use simcheck::config::{parse_threshold, Config};
use simcheck::error::CheckError;
use simcheck::extract::{extract_text, DocumentKind};
use simcheck::output::{self, terminal, ReportFormat};
use simcheck::pipeline::check::{run_check, CheckOptions, CheckOutcome};
use simcheck::samples::{self, SampleOptions};
use simcheck::similarity::traits::ComparisonMode;

/// Simcheck: pairwise document similarity screening.
///
/// Compares every pair of TXT, PDF and DOCX submissions in a folder and
/// ranks them by TF-IDF cosine similarity.
#[derive(Parser)]
#[command(name = "simcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// 1-3 word n-grams
    Standard,
    /// 1-5 word n-grams (more word-order context, still lexical)
    Enhanced,
}

impl From<ModeArg> for ComparisonMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Standard => ComparisonMode::Standard,
            ModeArg::Enhanced => ComparisonMode::Enhanced,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of documents in a folder
    Check {
        /// Folder of submissions (default: SIMCHECK_SUBMISSIONS_DIR or ./submissions)
        dir: Option<PathBuf>,

        /// Comparison mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Highlight pairs at or above this percent (0-100). Invalid values fall back to 50.
        #[arg(long)]
        threshold: Option<String>,

        /// Where to write report files (default: SIMCHECK_REPORTS_DIR or ./reports)
        #[arg(long)]
        reports_dir: Option<PathBuf>,

        /// Report formats to write (csv, txt, xlsx, pdf, json)
        #[arg(long, value_delimiter = ',', default_value = "csv,txt,xlsx,pdf")]
        format: Vec<String>,

        /// Only print to the terminal, write no report files
        #[arg(long)]
        no_reports: bool,
    },

    /// Show two documents' text side by side
    Compare {
        /// First document
        first: PathBuf,
        /// Second document
        second: PathBuf,
    },

    /// Generate sample submissions for a trial run
    GenerateSamples {
        /// Output folder (default: SIMCHECK_SUBMISSIONS_DIR or ./submissions)
        dir: Option<PathBuf>,

        /// Number of documents
        #[arg(long, default_value = "25")]
        count: usize,

        /// Lines per document
        #[arg(long, default_value = "1000")]
        lines: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("simcheck=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            dir,
            mode,
            threshold,
            reports_dir,
            format,
            no_reports,
        } => {
            let dir = dir.unwrap_or(config.submissions_dir);
            let options = CheckOptions {
                mode: mode.map(Into::into).unwrap_or(config.mode),
                threshold: threshold
                    .as_deref()
                    .map(parse_threshold)
                    .unwrap_or(config.threshold),
            };

            println!("{}", "=== Document Similarity Checker ===".bold());
            println!("Using {}", options.mode.description());

            let report = match run_check(&dir, &options)? {
                CheckOutcome::Compared(report) => report,
                CheckOutcome::NothingToCompare { document, warnings } => {
                    terminal::display_warnings(&warnings);
                    terminal::display_loaded_documents(std::slice::from_ref(&document));
                    println!(
                        "\n{}",
                        "No comparisons possible: only one valid document was found.".yellow()
                    );
                    return Err(CheckError::InsufficientDocuments { found: 1 }.into());
                }
            };

            terminal::display_warnings(&report.warnings);
            terminal::display_loaded_documents(&report.documents);
            terminal::display_summary(&report);
            terminal::display_results(&report);

            if !no_reports {
                let formats = format
                    .iter()
                    .map(|f| f.parse::<ReportFormat>())
                    .collect::<Result<Vec<_>>>()?;
                let reports_dir = reports_dir.unwrap_or(config.reports_dir);
                let written = output::write_reports(&report, &reports_dir, &formats)?;

                println!();
                for path in &written {
                    println!("  {} Report saved to: {}", "✓".green(), path.display());
                }
            }

            let top = &report.summary.highest;
            println!(
                "\n{} {} <--> {}",
                "Highest match:".bold(),
                top.doc_a,
                top.doc_b
            );
        }

        Commands::Compare { first, second } => {
            let left = read_document_text(&first)?;
            let right = read_document_text(&second)?;
            output::side_by_side::display(
                &display_name(&first),
                &left,
                &display_name(&second),
                &right,
            );
        }

        Commands::GenerateSamples {
            dir,
            count,
            lines,
            seed,
        } => {
            let dir = dir.unwrap_or(config.submissions_dir);
            let options = SampleOptions {
                count,
                lines_per_doc: lines,
                seed,
                ..SampleOptions::default()
            };
            let written = samples::generate(&dir, &options)?;
            println!(
                "{} Generated {} documents with {} lines each in '{}'",
                "✓".green(),
                written.len(),
                lines,
                dir.display()
            );
        }
    }

    Ok(())
}

/// Read and extract a single document for the side-by-side view.
fn read_document_text(path: &Path) -> Result<String> {
    let name = display_name(path);
    let kind = DocumentKind::from_name(&name);
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    info!(document = %name, "Extracting text for comparison");
    extract_text(&kind, &bytes)?
        .ok_or_else(|| anyhow::anyhow!("Unsupported file type: {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
