use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for locode
#[derive(Debug, Parser)]
#[command(
    name = "locode",
    version,
    about = "Load UN/LOCODE airports into staging and the warehouse"
)]
pub struct CliArgs {
    /// Path to the YAML configuration (default: ./config.yaml, then $AC_CFG)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive menu
    Menu,

    /// Save the UN/LOCODE raw data from the release zip to staging
    Stage {
        /// Empty the staging store first
        #[arg(long)]
        fresh: bool,
    },

    /// Process the staged raw data and load the airports into the warehouse
    Load,

    /// Run the transform straight from a release zip and print the airports as JSON
    Transform {
        /// Release zip (e.g. loc211csv.zip)
        zip: PathBuf,

        /// Regex selecting the code list files inside the zip
        #[arg(short = 'p', long)]
        pattern: Option<String>,

        /// Source text encoding (latin_1 or utf-8)
        #[arg(short = 'e', long, default_value = "latin_1")]
        encoding: String,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}
