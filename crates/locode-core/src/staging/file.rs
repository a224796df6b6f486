// crates/locode-core/src/staging/file.rs
use super::{DocumentStore, Projection};
use crate::error::{LocodeError, Result};
use crate::loader::common_io;
use crate::raw::LocationRecord;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// A JSON-lines document file. Gzipped when the `compact` feature is on.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    /// Opens the store at `path`; the file is created on first insert.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<LocationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(common_io::open_stream(&self.path)?);
        let mut docs = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let doc = serde_json::from_str(&line).map_err(|e| {
                LocodeError::InvalidData(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    line_no + 1,
                    e
                ))
            })?;
            docs.push(doc);
        }
        Ok(docs)
    }
}

impl DocumentStore for FileDocumentStore {
    fn insert_many(&mut self, docs: &[LocationRecord]) -> Result<usize> {
        if docs.is_empty() {
            return Ok(0);
        }
        info!("Record upload in progress");

        let mut payload = Vec::with_capacity(docs.len() * 96);
        for doc in docs {
            serde_json::to_writer(&mut payload, doc)?;
            payload.push(b'\n');
        }
        common_io::append_payload(&self.path, &payload)?;

        info!("Uploaded {} records", docs.len());
        Ok(docs.len())
    }

    fn find(&self, projection: &Projection) -> Result<Vec<LocationRecord>> {
        let docs = self.read_all()?;
        Ok(docs.into_iter().map(|d| projection.apply(d)).collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
