// crates/locode-core/src/transform/steps.rs

//! The individual transform stages.
//!
//! Each stage takes ownership of a table snapshot and hands back a new one,
//! so they compose in a fixed order and can be checked one at a time.

use super::CountryNames;
use crate::model::AirportRecord;
use crate::raw::LocationRecord;
use crate::text::title_case;
use std::collections::HashSet;

/// Stable sort on `country_code`; equal codes keep their relative order.
pub fn sort_by_country(mut rows: Vec<LocationRecord>) -> Vec<LocationRecord> {
    rows.sort_by(|a, b| a.country_code.cmp(&b.country_code));
    rows
}

/// Removes field-for-field duplicates, keeping the first occurrence.
/// Returns the survivors and the number removed.
pub fn drop_duplicates(rows: Vec<LocationRecord>) -> (Vec<LocationRecord>, usize) {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(rows.len());
        rows.iter().map(|r| seen.insert(r)).collect()
    };
    let before = rows.len();
    let out: Vec<LocationRecord> = rows
        .into_iter()
        .zip(keep)
        .filter_map(|(r, k)| k.then_some(r))
        .collect();
    let removed = before - out.len();
    (out, removed)
}

/// Builds the country code -> display name map from the heading rows.
///
/// Must run before [`drop_code_less`]. Later headings overwrite earlier ones.
pub fn country_names(rows: &[LocationRecord]) -> CountryNames {
    let mut names = CountryNames::default();
    for (code, text) in rows
        .iter()
        .filter_map(|r| r.heading_text().map(|t| (&r.country_code, t)))
    {
        names.insert(code.clone(), title_case(text));
    }
    names
}

/// Drops every row with an empty or missing place code.
pub fn drop_code_less(rows: Vec<LocationRecord>) -> (Vec<LocationRecord>, usize) {
    retain_counted(rows, |r| !r.is_code_less())
}

/// Keeps only rows whose classifier contains the airport code.
pub fn retain_airports(rows: Vec<LocationRecord>) -> (Vec<LocationRecord>, usize) {
    retain_counted(rows, LocationRecord::is_airport)
}

/// Copies the place code into `iata` wherever `iata` is empty or missing.
pub fn backfill_iata(rows: Vec<LocationRecord>) -> Vec<LocationRecord> {
    rows.into_iter()
        .map(|mut r| {
            if r.iata().is_none() {
                r.iata = r.locode.clone();
            }
            r
        })
        .collect()
}

/// Drops `code`, `function` and the metadata columns. `country` starts unset.
pub fn project(rows: Vec<LocationRecord>) -> Vec<AirportRecord> {
    rows.into_iter()
        .map(|r| AirportRecord {
            country_code: r.country_code,
            name_local: r.name_local,
            name: r.name,
            iata: r.iata.unwrap_or_default(),
            geo_coord: r.geo_coord,
            country: None,
        })
        .collect()
}

/// Fills `country` from the heading map. Unknown codes stay `None`.
pub fn enrich(rows: Vec<AirportRecord>, names: &CountryNames) -> Vec<AirportRecord> {
    rows.into_iter()
        .map(|mut r| {
            r.country = names.get(&r.country_code).map(str::to_owned);
            r
        })
        .collect()
}

fn retain_counted<F>(mut rows: Vec<LocationRecord>, keep: F) -> (Vec<LocationRecord>, usize)
where
    F: Fn(&LocationRecord) -> bool,
{
    let before = rows.len();
    rows.retain(|r| keep(r));
    let removed = before - rows.len();
    (rows, removed)
}
