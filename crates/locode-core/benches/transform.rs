// crates/locode-core/benches/transform.rs
use criterion::{criterion_group, criterion_main, Criterion};
use locode_core::{process_unlocode, LocationRecord};
use std::hint::black_box;

/// Roughly the shape of a real release: headings, a mix of functions, and a
/// few percent duplicated lines from overlapping parts.
fn synthetic_batch(countries: usize, per_country: usize) -> Vec<LocationRecord> {
    const FUNCTIONS: [&str; 5] = ["1-------", "--3-----", "---4----", "1234----", "0-------"];
    let mut rows = Vec::with_capacity(countries * (per_country + 1));
    for c in 0..countries {
        let lo = format!("{}{}", (b'A' + (c / 26) as u8) as char, (b'A' + (c % 26) as u8) as char);
        rows.push(LocationRecord {
            country_code: lo.clone(),
            name_local: format!(".COUNTRY NUMBER {c}"),
            ..Default::default()
        });
        for p in 0..per_country {
            rows.push(LocationRecord {
                country_code: lo.clone(),
                locode: Some(format!("{p:03}")),
                name_local: format!("Place {p}"),
                name: format!("Place {p}"),
                function: Some(FUNCTIONS[p % FUNCTIONS.len()].to_string()),
                iata: (p % 3 == 0).then(|| format!("X{p:02}")),
                ..Default::default()
            });
        }
    }
    let dupes: Vec<_> = rows.iter().step_by(25).cloned().collect();
    rows.extend(dupes);
    rows.reverse();
    rows
}

fn bench_transform(c: &mut Criterion) {
    let batch = synthetic_batch(240, 400);
    c.bench_function("process_unlocode_96k", |b| {
        b.iter(|| process_unlocode(black_box(&batch)))
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
