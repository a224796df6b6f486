//! locode — Command-line runner for the UN/LOCODE airport pipelines
//!
//! Usage examples
//! --------------
//!
//! - Interactive menu
//!   $ locode
//!
//! - Save the raw code list from the release zip to the staging store
//!   $ locode stage --fresh
//!
//! - Process staging and reload the warehouse airport table
//!   $ locode load
//!
//! - Transform only, no stores involved
//!   $ locode transform data/loc211csv.zip -o airports.json
mod args;
mod menu;

use crate::args::{CliArgs, Commands};
use crate::menu::{Action, Menu};
use anyhow::{Context, Result};
use clap::Parser;
use locode_core::config::{self, AppConfig};
use locode_core::loader::{self, SourceEncoding, DEFAULT_PATTERN};
use locode_core::pipeline;
use locode_core::staging::{DocumentStore, FileDocumentStore};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    init_logging();
    let args = CliArgs::parse();

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let Some(cfg) = resolve_config(args.config.as_deref())? else {
                return Ok(());
            };
            run_menu(&cfg)?;
        }

        Commands::Stage { fresh } => {
            let cfg = require_config(args.config.as_deref())?;
            stage(&cfg, fresh)?;
        }

        Commands::Load => {
            let cfg = require_config(args.config.as_deref())?;
            load(&cfg)?;
        }

        Commands::Transform {
            zip,
            pattern,
            encoding,
            output,
        } => {
            let pattern = Regex::new(pattern.as_deref().unwrap_or(DEFAULT_PATTERN))
                .context("invalid --pattern")?;
            let encoding: SourceEncoding = encoding.parse()?;
            transform(&zip, &pattern, encoding, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// -----------------------------------------------------------------------------
// CONFIG
// -----------------------------------------------------------------------------

/// Finds and loads the config, asking on the console as a last resort.
/// `None` means the user declined to give a path.
fn resolve_config(explicit: Option<&Path>) -> Result<Option<AppConfig>> {
    if let Some(p) = explicit {
        if !p.is_file() {
            anyhow::bail!("config file not found: {}", p.display());
        }
    }

    let path = match config::discover(explicit) {
        Some(p) => p,
        None => {
            let stdin = io::stdin();
            match menu::prompt_path(&mut stdin.lock(), &mut io::stdout(), "AirportCodes configuration file")? {
                Some(p) => PathBuf::from(p),
                None => return Ok(None),
            }
        }
    };

    let cfg = AppConfig::load(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    info!("Using configuration {}", path.display());
    Ok(Some(cfg))
}

fn require_config(explicit: Option<&Path>) -> Result<AppConfig> {
    resolve_config(explicit)?.context("no configuration given")
}

// -----------------------------------------------------------------------------
// PIPELINES
// -----------------------------------------------------------------------------

fn run_menu(cfg: &AppConfig) -> Result<()> {
    let menu = Menu::new("UN/LOCODE Data Processing Menu")
        .option("Save UN/LOCODE raw data to staging", Action::Stage)
        .option("Process UN/LOCODE raw data from staging, and save to Postgres", Action::Load)
        .option("Exit", Action::Close);

    loop {
        let action = {
            let stdin = io::stdin();
            menu.choose(&mut stdin.lock(), &mut io::stdout())?
        };
        let result = match action {
            Action::Stage => stage(cfg, false),
            Action::Load => load(cfg),
            Action::Close => return Ok(()),
        };
        // A failed run is reported and the menu shown again.
        if let Err(e) = result {
            eprintln!("Error: {e:#}");
        }
    }
}

fn stage(cfg: &AppConfig, fresh: bool) -> Result<()> {
    let mut store = FileDocumentStore::open(&cfg.staging.path)?;
    if fresh {
        store.clear()?;
    }
    let report = pipeline::csv_to_staging(&cfg.airport_codes, &mut store)
        .context("staging UN/LOCODE raw data")?;
    println!(
        "Staged {} rows from {} files into {}",
        report.staged,
        report.files,
        store.path().display()
    );
    Ok(())
}

#[cfg(feature = "postgres")]
fn load(cfg: &AppConfig) -> Result<()> {
    use locode_core::warehouse::PostgresWarehouse;

    let store = FileDocumentStore::open(&cfg.staging.path)?;
    let mut warehouse =
        PostgresWarehouse::connect(&cfg.postgresdb).context("connecting to PostgreSQL")?;
    let report = pipeline::staging_to_warehouse(&store, &mut warehouse)
        .context("loading airports into the warehouse")?;
    println!(
        "Loaded {} airports ({} staged rows, {} duplicates, {} without country)",
        report.uploaded,
        report.downloaded,
        report.transform.duplicates,
        report.transform.unmapped
    );
    Ok(())
}

#[cfg(not(feature = "postgres"))]
fn load(_cfg: &AppConfig) -> Result<()> {
    anyhow::bail!("this build has no warehouse backend; rebuild with the 'postgres' feature")
}

fn transform(
    zip: &Path,
    pattern: &Regex,
    encoding: SourceEncoding,
    output: Option<&Path>,
) -> Result<()> {
    let tables = loader::load_unlocode_zip(zip, pattern, encoding)?;
    let rows = loader::combine_tables(tables).unwrap_or_default();
    let airports = locode_core::process_unlocode(&rows);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    serde_json::to_writer_pretty(&mut writer, &airports)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
