// crates/locode-core/src/warehouse/mod.rs

//! # Warehouse Sink
//!
//! The relational end of the pipeline. Loading is a one-time operation: the
//! target table is dropped and recreated on every run.

use crate::error::{LocodeError, Result};
use crate::model::{AirportRecord, AIRPORT_COLUMNS};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PostgresWarehouse;

pub const DEFAULT_TABLE: &str = "airport_codes";

/// Rows per INSERT statement. Six parameters each keeps well under the
/// 65535 bind-parameter limit.
pub const INSERT_CHUNK: usize = 1000;

/// Destination for processed airport tables.
pub trait Warehouse {
    /// Replaces the airport table with `airports`, returning the number of rows added.
    fn replace_airports(&mut self, airports: &[AirportRecord]) -> Result<u64>;
}

/// SQL text for the airport table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportTable {
    name: String,
}

impl AirportTable {
    /// Table names are interpolated into SQL, so only `[A-Za-z0-9_]` is accepted.
    pub fn new(name: &str) -> Result<Self> {
        let valid = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(LocodeError::Config(format!("Invalid table name: {name:?}")));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }

    pub fn create_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
    id           SERIAL PRIMARY KEY,
    country_code TEXT   NOT NULL,
    name_local   TEXT   NOT NULL,
    name         TEXT   NOT NULL,
    iata         TEXT   NOT NULL,
    geo_coord    TEXT,
    country      TEXT
)",
            self.name
        )
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.name)
    }

    /// Multi-row INSERT with `$n` placeholders for `rows` rows.
    pub fn insert_sql(&self, rows: usize) -> String {
        let width = AIRPORT_COLUMNS.len();
        let values: Vec<String> = (0..rows)
            .map(|r| {
                let params: Vec<String> =
                    (1..=width).map(|c| format!("${}", r * width + c)).collect();
                format!("({})", params.join(", "))
            })
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.name,
            AIRPORT_COLUMNS.join(", "),
            values.join(", ")
        )
    }
}

impl Default for AirportTable {
    fn default() -> Self {
        Self {
            name: DEFAULT_TABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_sql_numbers_params_row_major() {
        let sql = AirportTable::default().insert_sql(2);
        assert_eq!(
            sql,
            "INSERT INTO airport_codes (country_code, name_local, name, iata, geo_coord, country) \
             VALUES ($1, $2, $3, $4, $5, $6), ($7, $8, $9, $10, $11, $12)"
        );
    }

    #[test]
    fn country_column_is_nullable() {
        let ddl = AirportTable::default().create_sql();
        assert!(ddl.contains("iata         TEXT   NOT NULL"));
        assert!(ddl.contains("country      TEXT\n"));
    }

    #[test]
    fn table_names_are_checked() {
        assert!(AirportTable::new("airports_2021").is_ok());
        assert!(AirportTable::new("1airports").is_err());
        assert!(AirportTable::new("airports; DROP TABLE x").is_err());
        assert!(AirportTable::new("").is_err());
    }
}
