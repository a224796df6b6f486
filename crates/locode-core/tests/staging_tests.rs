// crates/locode-core/tests/staging_tests.rs
mod support;

use locode_core::staging::{DocumentStore, FileDocumentStore, Projection};
use support::{place, sample_batch};

#[test]
fn documents_round_trip_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDocumentStore::open(dir.path().join("staging/unlocode.jsonl")).unwrap();
    assert_eq!(store.count().unwrap(), 0);

    let batch = sample_batch();
    assert_eq!(store.insert_many(&batch).unwrap(), batch.len());
    assert_eq!(store.find(&Projection::all()).unwrap(), batch);
}

#[test]
fn inserts_append() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDocumentStore::open(dir.path().join("unlocode.jsonl")).unwrap();

    store.insert_many(&sample_batch()).unwrap();
    store
        .insert_many(&[place("GB", "LHR", "London Heathrow", "---4----", "")])
        .unwrap();

    let docs = store.find(&Projection::all()).unwrap();
    assert_eq!(docs.len(), sample_batch().len() + 1);
    assert_eq!(docs.last().unwrap().locode(), Some("LHR"));
}

#[test]
fn projection_strips_metadata_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDocumentStore::open(dir.path().join("unlocode.jsonl")).unwrap();

    let mut doc = place("FR", "CDG", "Paris CDG", "---4----", "");
    doc.status = Some("AI".into());
    doc.remark = Some("renamed".into());
    store.insert_many(&[doc]).unwrap();

    let docs = store.find(&Projection::without_metadata()).unwrap();
    assert_eq!(docs[0].status, None);
    assert_eq!(docs[0].remark, None);
    assert_eq!(docs[0].function.as_deref(), Some("---4----"));
}

#[test]
fn clear_empties_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileDocumentStore::open(dir.path().join("unlocode.jsonl")).unwrap();
    store.insert_many(&sample_batch()).unwrap();
    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
    // Clearing twice is fine.
    store.clear().unwrap();
}
