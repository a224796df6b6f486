// crates/locode-core/src/raw.rs

//! Raw UN/LOCODE line items, exactly as read from the code list files.

use crate::common::FunctionClass;
use serde::{Deserialize, Serialize};

/// Prefix marking a country heading in `name_local`, e.g. `.FRANCE`.
pub const HEADING_PREFIX: char = '.';

/// One line of the UN/LOCODE code list.
///
/// Serialized field names follow the code list columns (`lo`, `code`), so
/// staged documents look like the source files. `country_code`/`locode` are
/// accepted as aliases on input.
///
/// Every optional column is an `Option`; the CSV reader maps empty fields to
/// `None`. An empty string and `None` are treated alike for `code` and `iata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(default)]
    pub change: Option<String>,
    #[serde(rename = "lo", alias = "country_code")]
    pub country_code: String,
    #[serde(rename = "code", alias = "locode", default)]
    pub locode: Option<String>,
    #[serde(default)]
    pub name_local: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subdivision: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub geo_coord: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

impl LocationRecord {
    /// The place code, if present and non-empty.
    #[inline]
    pub fn locode(&self) -> Option<&str> {
        non_empty(&self.locode)
    }

    /// The IATA code, if present and non-empty.
    #[inline]
    pub fn iata(&self) -> Option<&str> {
        non_empty(&self.iata)
    }

    /// Rows without a place code are country headings or renamed entries:
    ///
    /// ```text
    /// lo code name_local          name
    /// AD      .ANDORRA
    /// AE      Ruwais = Ar Ruways  Ruwais = Ar Ruways
    /// ```
    #[inline]
    pub fn is_code_less(&self) -> bool {
        self.locode().is_none()
    }

    /// A genuine country heading: no place code and a `.`-prefixed local name.
    pub fn is_country_heading(&self) -> bool {
        self.is_code_less() && self.name_local.starts_with(HEADING_PREFIX)
    }

    /// The raw heading text after the leading `.`, if this is a country heading.
    pub fn heading_text(&self) -> Option<&str> {
        if self.is_code_less() {
            self.name_local.strip_prefix(HEADING_PREFIX)
        } else {
            None
        }
    }

    /// Missing classifier means "not an airport", never an error.
    pub fn has_function(&self, class: FunctionClass) -> bool {
        self.function.as_deref().is_some_and(|f| class.is_in(f))
    }

    #[inline]
    pub fn is_airport(&self) -> bool {
        self.has_function(FunctionClass::Airport)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
