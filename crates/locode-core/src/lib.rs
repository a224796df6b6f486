// crates/locode-core/src/lib.rs

//! # locode-core
//!
//! Extracts the airports from a UN/LOCODE code list release.
//!
//! The pipeline runs in two batches:
//!
//! 1. [`pipeline::csv_to_staging`] reads the `CodeListPart*.csv` files from
//!    the release zip and parks the raw rows in a [`staging::DocumentStore`].
//! 2. [`pipeline::staging_to_warehouse`] reads them back, runs
//!    [`transform::process_unlocode`] and hands the airport table to a
//!    [`warehouse::Warehouse`].
//!
//! ```rust
//! use locode_core::{process_unlocode, LocationRecord};
//!
//! let batch = vec![
//!     LocationRecord {
//!         country_code: "FR".into(),
//!         name_local: ".FRANCE".into(),
//!         ..Default::default()
//!     },
//!     LocationRecord {
//!         country_code: "FR".into(),
//!         locode: Some("CDG".into()),
//!         name: "Paris CDG".into(),
//!         function: Some("---4----".into()),
//!         ..Default::default()
//!     },
//! ];
//!
//! let airports = process_unlocode(&batch);
//! assert_eq!(airports.len(), 1);
//! assert_eq!(airports[0].iata, "CDG");
//! assert_eq!(airports[0].country.as_deref(), Some("France"));
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod raw;
pub mod staging;
pub mod text;
pub mod transform;
pub mod warehouse;

// Re-exports
pub use crate::common::{FunctionClass, TransformStats};
pub use crate::error::{LocodeError, Result};
pub use crate::model::AirportRecord;
pub use crate::raw::LocationRecord;
pub use crate::transform::{process_unlocode, process_with_stats, CountryNames};
