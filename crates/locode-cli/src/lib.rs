//! locode-cli
//! ==========
//!
//! Command-line runner for the `locode-core` UN/LOCODE airport pipelines.
//!
//! This crate primarily provides a binary (`locode`). The library target only
//! exists so the overview below is rendered alongside the core docs.
//!
//! Quick start
//! -----------
//!
//! ```text
//! locode --help
//! locode                      # interactive menu
//! locode stage --fresh        # release zip -> staging store
//! locode load                 # staging store -> warehouse
//! locode transform data/loc211csv.zip -o airports.json
//! ```
//!
//! Configuration
//! -------------
//!
//! `stage`, `load` and the menu need a YAML config. It is taken from
//! `--config`, else `./config.yaml`, else the file named by `AC_CFG`; failing
//! all of those the CLI asks for a path on the console.
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for per-file detail.
