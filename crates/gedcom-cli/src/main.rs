//! `gedcom` binary: loads a GEDCOM file and prints its individuals and
//! families.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use gedcom_loader::{load_path, GedcomError, LoaderConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned text tables
    Table,
    /// Both tables as CSV sections
    Csv,
    /// A single JSON document
    Json,
}

#[derive(Parser)]
#[command(
    name = "gedcom",
    version,
    about = "Load a GEDCOM file and print its individuals and families"
)]
struct Cli {
    /// GEDCOM file to load
    #[arg(env = "GEDCOM_FILE")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Date ages are computed on, as YYYY-MM-DD (default: today)
    #[arg(long, env = "GEDCOM_REFERENCE_DATE")]
    reference_date: Option<NaiveDate>,

    /// Fail instead of printing records if any problem is found
    #[arg(long)]
    strict: bool,

    /// Do not report links that are recorded on one side only
    #[arg(long)]
    no_back_links: bool,
}

impl Cli {
    fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            strict: self.strict,
            check_back_links: !self.no_back_links,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let today = cli
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());

    tracing::info!("Loading GEDCOM data from: {}", cli.path.display());

    let outcome = match load_path(&cli.path, &cli.loader_config()) {
        Ok(outcome) => outcome,
        Err(GedcomError::Rejected { diagnostics }) => {
            render::write_diagnostics(&mut io::stderr().lock(), &diagnostics)?;
            anyhow::bail!("{} rejected in strict mode", cli.path.display());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("could not load {}", cli.path.display()));
        }
    };

    tracing::info!(
        "Loaded {} individuals and {} families in {} ms ({:.1}% of lines recognized)",
        outcome.stats.individuals,
        outcome.stats.families,
        outcome.stats.parse_time_ms,
        outcome.stats.recognition_rate()
    );

    let individuals = outcome.genealogy.individual_rows(today);
    let families = outcome.genealogy.family_rows();

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Table => render::write_tables(&mut out, &individuals, &families)?,
        Format::Csv => render::write_csv(&mut out, &individuals, &families)?,
        Format::Json => render::write_json(&mut out, &individuals, &families)?,
    }
    out.flush()?;

    render::write_diagnostics(&mut io::stderr().lock(), &outcome.diagnostics)?;
    Ok(())
}
