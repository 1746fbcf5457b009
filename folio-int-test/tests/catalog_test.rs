use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use folio::catalog::{Catalog, RebuildPolicy, RebuildReport};
use folio::common::{fold, Value};
use folio::config::FolioConfig;
use folio::errors::ErrorKind;
use folio::record::{Record, RecordField};
use folio_int_test::test_util::{
    assert_bst_invariant, cleanup, create_test_context, create_test_records, distinct_title_records,
    is_sorted, load_records, run_test, shuffled, titles, RECORDS_JSON,
};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_rebuild_from_unsorted_input() {
    let catalog = Catalog::new();
    let records = shuffled(distinct_title_records(300));
    let report = catalog.rebuild(records, RebuildPolicy::Halt).unwrap();
    assert_eq!(report, RebuildReport { ingested: 300, skipped: 0 });

    let index = catalog.snapshot();
    assert_bst_invariant(&index);
    assert_eq!(index.height(), 300);
    assert!(is_sorted(
        index.iter_pre_order().map(|r| fold(r.title())),
        true
    ));
}

#[test]
fn test_rebuild_replaces_contents() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let before = ctx.index();

            let json_records = load_records(RECORDS_JSON)?;
            catalog.rebuild(json_records, RebuildPolicy::Halt)?;

            let after = ctx.index();
            assert_eq!(before.count(), 9);
            assert_eq!(
                titles(&after.in_order()),
                vec!["Kindred", "Middlemarch", "Solaris"]
            );
            assert!(after.find_by_title("Dune").is_none());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_json_fixture_keeps_extras_searchable_by_field() {
    let catalog = Catalog::new();
    catalog
        .rebuild(load_records(RECORDS_JSON).unwrap(), RebuildPolicy::Halt)
        .unwrap();
    let index = catalog.snapshot();

    let kindred = index.find_by_id(12).unwrap();
    assert_eq!(kindred.editorial(), Some("Beacon Press"));
    assert_eq!(kindred.extra("stock"), Some(&Value::I64(4)));

    let covers = index.search_by_prefix_on("https://", RecordField::Extra("cover_url".into()));
    assert_eq!(titles(&covers), vec!["Solaris"]);
}

#[test]
fn test_bad_fixture_is_an_encoding_error() {
    let err = load_records(r#"[{"title": "No author"}]"#).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EncodingError);
}

#[test]
fn test_halt_and_skip_policies() {
    let catalog = Catalog::new();
    catalog
        .rebuild(create_test_records(), RebuildPolicy::Halt)
        .unwrap();

    let mut records = create_test_records();
    records.insert(3, Record::new("   ", "Anonymous", "Unknown").with_id(99));

    let err = catalog
        .rebuild(records.clone(), RebuildPolicy::Halt)
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ValidationError);
    assert!(err.to_string().contains("Rebuild aborted"));
    assert_eq!(catalog.snapshot().count(), 9);

    let report = catalog.rebuild(records, RebuildPolicy::Skip).unwrap();
    assert_eq!(report, RebuildReport { ingested: 9, skipped: 1 });
    assert!(catalog.snapshot().find_by_id(99).is_none());
}

#[test]
fn test_catalog_config_reaches_every_snapshot() {
    let config = FolioConfig::new()
        .with_suggestion_limit(1)
        .with_suggestion_max_distance(10);
    let catalog = Catalog::with_config(config.clone());
    catalog
        .rebuild(create_test_records(), RebuildPolicy::Halt)
        .unwrap();

    let index = catalog.snapshot();
    assert_eq!(index.suggest_default("Dun").len(), 1);
    config.set_suggestion_limit(3);
    assert_eq!(catalog.snapshot().suggest_default("Dun").len(), 3);
}

#[test]
fn test_concurrent_reads_during_rebuild() {
    let catalog = Catalog::new();
    let small = create_test_records();
    let large = distinct_title_records(1_000);
    let small_count = small.len();
    let large_count = large.len();
    catalog.rebuild(small.clone(), RebuildPolicy::Halt).unwrap();

    let num_readers = 4;
    let barrier = Arc::new(Barrier::new(num_readers + 1));
    let done = Arc::new(AtomicBool::new(false));

    let mut handles = vec![];
    for _ in 0..num_readers {
        let catalog = catalog.clone();
        let barrier = Arc::clone(&barrier);
        let done = Arc::clone(&done);

        handles.push(thread::spawn(move || {
            barrier.wait();
            let mut reads = 0usize;
            while !done.load(Ordering::Acquire) || reads == 0 {
                let index = catalog.snapshot();
                let count = index.count();
                assert!(
                    count == small_count || count == large_count,
                    "reader saw {} records",
                    count
                );
                assert_eq!(index.in_order().len(), count);
                reads += 1;
            }
            reads
        }));
    }

    barrier.wait();
    for round in 0..20 {
        let batch = if round % 2 == 0 {
            large.clone()
        } else {
            small.clone()
        };
        catalog.rebuild(batch, RebuildPolicy::Halt).unwrap();
    }
    done.store(true, Ordering::Release);

    for handle in handles {
        let reads = handle.join().unwrap();
        assert!(reads > 0);
    }
    assert_eq!(catalog.snapshot().count(), small_count);
}
