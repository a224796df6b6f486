// crates/locode-core/examples/basic_usage.rs
//
// Run the transform over a release zip and print the airports.
//
//   cargo run -p locode-core --example basic_usage -- data/loc211csv.zip
use locode_core::loader::{combine_tables, load_unlocode_zip, SourceEncoding, DEFAULT_PATTERN_RE};
use locode_core::process_with_stats;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let zip_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: basic_usage <unlocode.zip>")?;

    let tables = load_unlocode_zip(&zip_path, &DEFAULT_PATTERN_RE, SourceEncoding::Latin1)?;
    let rows = combine_tables(tables).unwrap_or_default();
    let processed = process_with_stats(&rows);

    for airport in processed.airports.iter().take(20) {
        println!("{}", airport.label());
    }
    println!("{:#?}", processed.stats);
    Ok(())
}
