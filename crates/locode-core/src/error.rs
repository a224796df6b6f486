// crates/locode-core/src/error.rs
use thiserror::Error;

/// Errors raised by the I/O-facing parts of the pipeline.
///
/// The transform itself never fails; everything here comes from the loader,
/// the staging store, the warehouse sink or configuration discovery.
#[derive(Debug, Error)]
pub enum LocodeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for LocodeError {
    fn from(err: tokio_postgres::Error) -> Self {
        LocodeError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LocodeError>;
