// crates/locode-core/src/staging/mod.rs

//! # Staging Store
//!
//! Raw code list rows are parked here between the two pipelines, one
//! document per row, before being processed into the warehouse.

use crate::common::{COL_CHANGE, COL_DATE, COL_DIVISION, COL_REMARK, COL_STATUS};
use crate::error::Result;
use crate::raw::LocationRecord;
use std::collections::BTreeSet;

mod file;

pub use file::FileDocumentStore;

/// A collection of raw location documents.
pub trait DocumentStore {
    /// Stores the documents, returning how many were inserted.
    fn insert_many(&mut self, docs: &[LocationRecord]) -> Result<usize>;

    /// All stored documents in insertion order, with `projection` applied.
    fn find(&self, projection: &Projection) -> Result<Vec<LocationRecord>>;

    fn count(&self) -> Result<usize>;

    /// Removes every document.
    fn clear(&mut self) -> Result<()>;
}

/// Fields left out of documents read back from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    exclude: BTreeSet<&'static str>,
}

impl Projection {
    /// Keep every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// The administrative metadata the transform has no use for.
    pub fn without_metadata() -> Self {
        Self::all()
            .exclude(COL_CHANGE)
            .exclude(COL_DIVISION)
            .exclude(COL_STATUS)
            .exclude(COL_DATE)
            .exclude(COL_REMARK)
    }

    /// Excludes one of the optional metadata columns. Other names are ignored.
    pub fn exclude(mut self, field: &'static str) -> Self {
        self.exclude.insert(field);
        self
    }

    pub fn excludes(&self, field: &str) -> bool {
        self.exclude.contains(field)
    }

    pub fn apply(&self, mut doc: LocationRecord) -> LocationRecord {
        if self.exclude.is_empty() {
            return doc;
        }
        for (name, slot) in [
            (COL_CHANGE, &mut doc.change),
            (COL_DIVISION, &mut doc.subdivision),
            (COL_STATUS, &mut doc.status),
            (COL_DATE, &mut doc.date),
            (COL_REMARK, &mut doc.remark),
        ] {
            if self.excludes(name) {
                *slot = None;
            }
        }
        doc
    }
}
