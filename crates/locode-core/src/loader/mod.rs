// crates/locode-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer of a UN/LOCODE release: the zip archive, the
//! per-file text encoding and the header-less CSV layout.

use crate::common::UNLOCODE_HEADER;
use crate::error::{LocodeError, Result};
use crate::raw::LocationRecord;
use csv::{ReaderBuilder, StringRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub mod common_io;

pub use common_io::SourceEncoding;

/// File name pattern of the code list parts inside a release zip.
pub const DEFAULT_PATTERN: &str = r".*UNLOCODE CodeListPart\d*\.csv";

pub static DEFAULT_PATTERN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default pattern is a valid regex"));

/// Rows of one CSV file from the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub file_name: String,
    pub rows: Vec<LocationRecord>,
}

/// Load every CSV file in `zip_path` whose name matches `pattern`.
///
/// Matching is anchored at the start of the entry name. Files are returned in
/// archive order.
pub fn load_csv_from_zip(
    zip_path: &Path,
    pattern: &Regex,
    encoding: SourceEncoding,
    header: &[&str],
) -> Result<Vec<SourceTable>> {
    if !zip_path.exists() {
        return Err(LocodeError::InvalidData(format!(
            "Invalid zip file path: {}",
            zip_path.display()
        )));
    }

    let header = StringRecord::from(header.to_vec());
    let mut archive = zip::ZipArchive::new(File::open(zip_path)?)?;
    let mut tables = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let file_name = entry.name().to_string();
        if entry.is_dir() || !matches_from_start(pattern, &file_name) {
            debug!("Skipping {}", file_name);
            continue;
        }

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        let text = encoding.decode(bytes)?;
        let rows = parse_csv(&text, &header)?;
        debug!("Read {} rows from {}", rows.len(), file_name);

        tables.push(SourceTable { file_name, rows });
    }

    info!("Loaded {} files", tables.len());
    Ok(tables)
}

/// [`load_csv_from_zip`] with the standard UN/LOCODE header.
pub fn load_unlocode_zip(
    zip_path: &Path,
    pattern: &Regex,
    encoding: SourceEncoding,
) -> Result<Vec<SourceTable>> {
    load_csv_from_zip(zip_path, pattern, encoding, &UNLOCODE_HEADER)
}

/// Concatenates the tables in order. `None` when there is nothing to combine.
pub fn combine_tables(tables: Vec<SourceTable>) -> Option<Vec<LocationRecord>> {
    let count = tables.len();
    let combined = if count == 0 {
        None
    } else {
        let total = tables.iter().map(|t| t.rows.len()).sum();
        let mut rows = Vec::with_capacity(total);
        for table in tables {
            rows.extend(table.rows);
        }
        Some(rows)
    };
    info!("Merged {} tables", count);
    combined
}

/// Parses header-less CSV text, naming the columns with `header`.
///
/// Short rows are accepted; their missing trailing columns read as empty.
pub fn parse_csv(text: &str, header: &StringRecord) -> Result<Vec<LocationRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.deserialize(Some(header))?);
    }
    Ok(rows)
}

fn matches_from_start(pattern: &Regex, name: &str) -> bool {
    pattern.find(name).is_some_and(|m| m.start() == 0)
}
