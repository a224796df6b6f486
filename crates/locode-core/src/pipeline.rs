// crates/locode-core/src/pipeline.rs

//! The two batch pipelines:
//!
//! 1. code list zip -> staging store
//! 2. staging store -> transform -> warehouse

use crate::common::TransformStats;
use crate::config::AirportCodesConfig;
use crate::error::Result;
use crate::loader;
use crate::staging::{DocumentStore, Projection};
use crate::transform;
use crate::warehouse::Warehouse;
use regex::Regex;
use tracing::info;

/// What the zip -> staging run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingReport {
    pub files: usize,
    pub rows: usize,
    pub staged: usize,
}

/// What the staging -> warehouse run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarehouseReport {
    pub downloaded: usize,
    pub transform: TransformStats,
    pub uploaded: u64,
}

/// Loads the code list parts from the release zip into the staging store.
pub fn csv_to_staging<S: DocumentStore>(
    cfg: &AirportCodesConfig,
    store: &mut S,
) -> Result<StagingReport> {
    let pattern = Regex::new(&cfg.pattern)?;
    let tables = loader::load_unlocode_zip(&cfg.unlocode_zip, &pattern, cfg.encoding)?;
    let files = tables.len();

    let rows = loader::combine_tables(tables).unwrap_or_default();
    let staged = store.insert_many(&rows)?;

    let report = StagingReport {
        files,
        rows: rows.len(),
        staged,
    };
    info!(
        "Staged {} of {} rows from {} files",
        report.staged, report.rows, report.files
    );
    Ok(report)
}

/// Processes the staged rows and replaces the warehouse airport table.
pub fn staging_to_warehouse<S, W>(store: &S, warehouse: &mut W) -> Result<WarehouseReport>
where
    S: DocumentStore,
    W: Warehouse,
{
    let raw = store.find(&Projection::without_metadata())?;
    let downloaded = raw.len();
    info!("Downloaded {} records from staging", downloaded);

    let processed = transform::process_with_stats(&raw);
    let uploaded = warehouse.replace_airports(&processed.airports)?;

    Ok(WarehouseReport {
        downloaded,
        transform: processed.stats,
        uploaded,
    })
}
