// crates/locode-core/tests/support/mod.rs
#![allow(dead_code)]

use locode_core::{AirportRecord, LocationRecord};
use locode_core::warehouse::Warehouse;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

pub fn heading(lo: &str, name_local: &str) -> LocationRecord {
    LocationRecord {
        country_code: lo.into(),
        name_local: name_local.into(),
        ..Default::default()
    }
}

pub fn place(lo: &str, code: &str, name: &str, function: &str, iata: &str) -> LocationRecord {
    LocationRecord {
        country_code: lo.into(),
        locode: Some(code.into()),
        name_local: name.into(),
        name: name.into(),
        function: Some(function.into()),
        iata: Some(iata.into()),
        ..Default::default()
    }
}

/// A small mixed batch: two countries, headings, a renamed entry, ports,
/// airports with and without IATA codes, and one airport of a country that
/// has no heading.
pub fn sample_batch() -> Vec<LocationRecord> {
    vec![
        place("FR", "CDG", "Paris-Charles de Gaulle", "---4----", ""),
        heading("AD", ".ANDORRA"),
        place("AD", "ALV", "Andorra la Vella", "--34-6--", ""),
        heading("FR", ".FRANCE"),
        place("FR", "MRS", "Marseille", "1234----", "MRS"),
        place("FR", "LEH", "Le Havre", "1-3-----", ""),
        heading("AE", "Ruwais = Ar Ruways"),
        place("ZZ", "XYZ", "Nowhere Field", "---4----", "NWF"),
        place("FR", "ORY", "Paris-Orly", "---4----", "ORY"),
    ]
}

/// Writes `files` (name, bytes) into a zip at `path`.
pub fn write_zip(path: &Path, files: &[(&str, Vec<u8>)]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, bytes) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

/// Encodes text as ISO-8859-1. Panics on characters outside that range.
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("latin-1 character"))
        .collect()
}

/// Warehouse double that keeps the last table it was given.
#[derive(Debug, Default)]
pub struct MemoryWarehouse {
    pub table: Vec<AirportRecord>,
    pub loads: usize,
}

impl Warehouse for MemoryWarehouse {
    fn replace_airports(&mut self, airports: &[AirportRecord]) -> locode_core::Result<u64> {
        self.table = airports.to_vec();
        self.loads += 1;
        Ok(airports.len() as u64)
    }
}
