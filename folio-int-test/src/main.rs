use folio::catalog::{Catalog, RebuildPolicy};
use folio::errors::FolioResult;
use folio::filter::field;
use folio_int_test::test_util::{cleanup, random_records, TestContext};

fn main() -> FolioResult<()> {
    println!("Starting stress test...");
    let ctx = TestContext::new(Catalog::new());

    let count = 20_000;
    let records = random_records(count);

    let start = std::time::Instant::now();
    let report = ctx.catalog().rebuild(records.clone(), RebuildPolicy::Skip)?;
    println!(
        "Rebuilt {} records ({} skipped) in {:?}",
        report.ingested,
        report.skipped,
        start.elapsed()
    );

    let index = ctx.index();
    let start = std::time::Instant::now();
    let found = records
        .iter()
        .take(100)
        .filter(|record| index.find_by_title(record.title()).is_some())
        .count();
    println!("Found {} titles on a {}-level chain in {:?}", found, index.height(), start.elapsed());

    let start = std::time::Instant::now();
    let matches = index.find(&field("genre").contains("fiction"));
    println!("Matched {} records by genre in {:?}", matches.len(), start.elapsed());

    let start = std::time::Instant::now();
    let suggestions = index.suggest_default("lorem ipsum");
    println!("Ranked {} suggestions in {:?}", suggestions.len(), start.elapsed());

    drop(index);
    cleanup(ctx)
}
