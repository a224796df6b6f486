// crates/locode-core/src/transform/mod.rs

//! # UN/LOCODE Transform
//!
//! Turns a combined table of raw code list rows into the deduplicated
//! airport table, enriched with country names taken from the heading rows of
//! the same batch.
//!
//! The stages run in a fixed order, see [`process_unlocode`]. Nothing here
//! fails: irregular rows are skipped or left unenriched.

use crate::common::TransformStats;
use crate::model::AirportRecord;
use crate::raw::LocationRecord;
use std::collections::HashMap;
use tracing::{info, warn};

pub mod steps;

/// Country code -> display name, built once per batch from heading rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryNames(HashMap<String, String>);

impl CountryNames {
    pub fn get(&self, country_code: &str) -> Option<&str> {
        self.0.get(country_code).map(String::as_str)
    }

    pub fn insert(&mut self, country_code: String, name: String) {
        self.0.insert(country_code, name);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Output of one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Processed {
    pub airports: Vec<AirportRecord>,
    pub stats: TransformStats,
}

/// Process UN/LOCODE data to prepare it for the warehouse.
///
/// The input is treated as read-only; the stages work on a private copy.
pub fn process_unlocode(batch: &[LocationRecord]) -> Vec<AirportRecord> {
    process_with_stats(batch).airports
}

/// Same as [`process_unlocode`], also returning the row counts of each stage.
pub fn process_with_stats(batch: &[LocationRecord]) -> Processed {
    let mut stats = TransformStats {
        input: batch.len(),
        ..Default::default()
    };

    if batch.is_empty() {
        info!("Batch empty");
        return Processed::default();
    }

    // 1. Sort & dedup
    let rows = steps::sort_by_country(batch.to_vec());
    let (rows, duplicates) = steps::drop_duplicates(rows);
    stats.duplicates = duplicates;
    if duplicates > 0 {
        info!("Dropped {} duplicates of {}", duplicates, stats.input);
    }

    // 2. Country names, while the heading rows are still there
    let names = steps::country_names(&rows);
    stats.countries = names.len();

    // 3. Headings & renamed entries
    let pre_len = rows.len();
    let (rows, headings) = steps::drop_code_less(rows);
    stats.headings = headings;
    if headings > 0 {
        info!("Dropped {} country headings from {}", headings, pre_len);
    }

    // 4. Airports only
    let pre_len = rows.len();
    let (rows, non_airports) = steps::retain_airports(rows);
    stats.non_airports = non_airports;
    if non_airports > 0 {
        info!("Dropped {} non-airport entries from {}", non_airports, pre_len);
    }

    // 5. Reshape
    let rows = steps::backfill_iata(rows);
    let airports = steps::enrich(steps::project(rows), &names);

    stats.airports = airports.len();
    stats.unmapped = airports.iter().filter(|a| a.country.is_none()).count();
    if stats.unmapped > 0 {
        warn!("{} airports have no country heading", stats.unmapped);
    }
    info!("Processed data for {} airports", stats.airports);

    Processed { airports, stats }
}
