// crates/locode-core/src/common.rs

//! Shared vocabulary of the UN/LOCODE code list.
//!
//! For the data format see the UN/LOCODE manual published by UNECE
//! (<https://unece.org/trade/uncefact/unlocode>).

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// COLUMN NAMES
// -----------------------------------------------------------------------------

/// Change indicator showing whether the entry has been modified.
pub const COL_CHANGE: &str = "change";
/// ISO 3166 alpha-2 country code.
pub const COL_LO: &str = "lo";
/// 3-character code for the place name.
pub const COL_CODE: &str = "code";
/// Place name in the national language, where possible.
pub const COL_LOCAL: &str = "name_local";
/// Place name without diacritic signs.
pub const COL_NAME: &str = "name";
/// ISO 3166-2 administrative division code.
pub const COL_DIVISION: &str = "subdivision";
/// Function classifier string, e.g. `--34-6--`.
pub const COL_FUNCTION: &str = "function";
pub const COL_STATUS: &str = "status";
/// Reference date (year and month of the request).
pub const COL_DATE: &str = "date";
/// IATA code, if different from the location code.
pub const COL_IATA: &str = "iata";
/// Coordinates as `ddmmN dddmmW`.
pub const COL_COORD: &str = "geo_coord";
pub const COL_REMARK: &str = "remark";

/// Column layout of the header-less UN/LOCODE CSV files, in file order.
pub const UNLOCODE_HEADER: [&str; 12] = [
    COL_CHANGE,
    COL_LO,
    COL_CODE,
    COL_LOCAL,
    COL_NAME,
    COL_DIVISION,
    COL_FUNCTION,
    COL_STATUS,
    COL_DATE,
    COL_IATA,
    COL_COORD,
    COL_REMARK,
];

// -----------------------------------------------------------------------------
// FUNCTION CLASSIFIERS
// -----------------------------------------------------------------------------

/// Transport function of a location, one character each in the `function` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionClass {
    /// Port, as defined in Rec. 16.
    Port,
    Rail,
    Road,
    Airport,
    /// Postal exchange office.
    Post,
    /// Multimodal functions, ICDs etc.
    Multimodal,
    /// Fixed transport functions (e.g. oil platform).
    Fixed,
    Border,
    /// Function not known, to be specified.
    Unknown,
}

impl FunctionClass {
    pub const ALL: [FunctionClass; 9] = [
        FunctionClass::Port,
        FunctionClass::Rail,
        FunctionClass::Road,
        FunctionClass::Airport,
        FunctionClass::Post,
        FunctionClass::Multimodal,
        FunctionClass::Fixed,
        FunctionClass::Border,
        FunctionClass::Unknown,
    ];

    pub const fn code(self) -> char {
        match self {
            FunctionClass::Port => '1',
            FunctionClass::Rail => '2',
            FunctionClass::Road => '3',
            FunctionClass::Airport => '4',
            FunctionClass::Post => '5',
            FunctionClass::Multimodal => '6',
            FunctionClass::Fixed => '7',
            FunctionClass::Border => 'B',
            FunctionClass::Unknown => '0',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == c)
    }

    /// Substring test on a raw classifier string. Any position counts.
    #[inline]
    pub fn is_in(self, function: &str) -> bool {
        function.contains(self.code())
    }

    /// All classes present in a raw classifier string, ignoring placeholders.
    pub fn parse_all(function: &str) -> Vec<Self> {
        function.chars().filter_map(Self::from_code).collect()
    }
}

// -----------------------------------------------------------------------------
// REPORTING
// -----------------------------------------------------------------------------

/// Row counts produced by one transform invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    pub input: usize,
    pub duplicates: usize,
    pub headings: usize,
    pub non_airports: usize,
    pub countries: usize,
    pub airports: usize,
    /// Airports left with no matching country heading.
    pub unmapped: usize,
}
