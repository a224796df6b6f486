// crates/locode-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Output columns, in warehouse order.
pub const AIRPORT_COLUMNS: [&str; 6] = [
    "country_code",
    "name_local",
    "name",
    "iata",
    "geo_coord",
    "country",
];

/// A cleaned airport entry, ready for the warehouse.
///
/// `iata` is never empty: entries without one carry their own place code.
/// `country` is `None` when the batch held no heading for `country_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirportRecord {
    pub country_code: String,
    pub name_local: String,
    pub name: String,
    pub iata: String,
    pub geo_coord: Option<String>,
    pub country: Option<String>,
}

impl AirportRecord {
    /// Display label, e.g. `Paris CDG (CDG), France`.
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) => format!("{} ({}), {}", self.name, self.iata, country),
            None => format!("{} ({}), {}", self.name, self.iata, self.country_code),
        }
    }
}
