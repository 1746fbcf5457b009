use std::collections::HashSet;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Arc;

use fake::faker::barcode::en::Isbn;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use folio::catalog::{Catalog, RebuildPolicy};
use folio::common::fold;
use folio::errors::{ErrorKind, FolioError, FolioResult};
use folio::index::{Node, TitleIndex};
use folio::record::Record;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

pub const GENRES: [&str; 8] = [
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Classic",
    "Horror",
    "Poetry",
    "History",
    "Dystopia",
];

/// Runs `test` against the context `before` creates, then hands the context
/// to `after` whether the test passed, failed or panicked.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> FolioResult<()>,
    B: Fn() -> FolioResult<TestContext>,
    A: Fn(TestContext) -> FolioResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let outcome = catch_unwind(AssertUnwindSafe(|| test(ctx.clone())));
    let after_result = after(ctx);

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test failed: {:?}", e),
        Err(panic) => resume_unwind(panic),
    }
    if let Err(e) = after_result {
        panic!("After run failed: {:?}", e);
    }
}

#[derive(Clone)]
pub struct TestContext {
    catalog: Catalog,
}

impl TestContext {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    pub fn index(&self) -> Arc<TitleIndex> {
        self.catalog.snapshot()
    }
}

/// A catalog published from [create_test_records].
pub fn create_test_context() -> FolioResult<TestContext> {
    let catalog = Catalog::new();
    catalog.rebuild(create_test_records(), RebuildPolicy::Halt)?;
    Ok(TestContext::new(catalog))
}

pub fn create_empty_context() -> FolioResult<TestContext> {
    Ok(TestContext::new(Catalog::new()))
}

pub fn cleanup(ctx: TestContext) -> FolioResult<()> {
    ctx.catalog().clear();
    if ctx.index().is_empty() {
        Ok(())
    } else {
        Err(FolioError::new(
            "Catalog still serves records after clear",
            ErrorKind::InternalError,
        ))
    }
}

pub fn create_test_records() -> Vec<Record> {
    vec![
        Record::new("Neuromancer", "William Gibson", "Cyberpunk")
            .with_id(1)
            .with_isbn("978-0441569595")
            .with_editorial("Ace"),
        Record::new("Emma", "Jane Austen", "Classic").with_id(2),
        Record::new("The Road", "Cormac McCarthy", "Post-apocalyptic")
            .with_id(3)
            .with_editorial("Knopf"),
        Record::new("Beloved", "Toni Morrison", "Literary Fiction").with_id(4),
        Record::new("Hamlet", "William Shakespeare", "Tragedy").with_id(5),
        Record::new("Rebecca", "Daphne du Maurier", "Gothic").with_id(6),
        Record::new("Dune", "Frank Herbert", "Science Fiction")
            .with_id(7)
            .with_isbn("978-0441013593"),
        Record::new("Foundation", "Isaac Asimov", "Science Fiction").with_id(8),
        Record::new("1984", "George Orwell", "Dystopia").with_id(9),
    ]
}

/// Builds an index by ingesting `records` in the order given.
pub fn index_of(records: &[Record]) -> FolioResult<TitleIndex> {
    TitleIndex::build(records.iter().cloned())
}

/// `count` fake records in random order. Titles may repeat.
pub fn random_records(count: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| fake_record(&mut rng, i as u64))
        .collect()
}

/// `count` fake records whose titles are distinct once case is folded.
pub fn distinct_title_records(count: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(count);
    let mut id = 0u64;
    while records.len() < count {
        let record = fake_record(&mut rng, id);
        id += 1;
        if seen.insert(fold(record.title())) {
            records.push(record);
        }
    }
    records
}

fn fake_record<R: Rng>(rng: &mut R, id: u64) -> Record {
    let title = Words(1..4).fake_with_rng::<Vec<String>, _>(rng).join(" ");
    let author: String = Name().fake_with_rng(rng);
    let genre = GENRES.choose(rng).copied().unwrap_or("Classic");

    let mut record = Record::new(title, author, genre).with_id(id);
    if rng.random_bool(0.5) {
        record = record.with_isbn(Isbn().fake_with_rng::<String, _>(rng));
    }
    if rng.random_bool(0.3) {
        record = record.with_editorial(CompanyName().fake_with_rng::<String, _>(rng));
    }
    record
}

pub fn shuffled(mut records: Vec<Record>) -> Vec<Record> {
    records.shuffle(&mut rand::rng());
    records
}

pub fn titles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|record| record.title().to_string()).collect()
}

pub fn is_sorted<T: Ord>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let mut iter = iterable.into_iter();
    if let Some(mut prev) = iter.next() {
        for current in iter {
            if ascending {
                if prev > current {
                    return false;
                }
            } else if prev < current {
                return false;
            }
            prev = current;
        }
    }
    true
}

/// Checks every node against the bounds its ancestors impose: a left subtree
/// holds strictly smaller keys, a right subtree equal or greater ones.
pub fn assert_bst_invariant(index: &TitleIndex) {
    let mut stack: Vec<(&Node, Option<&str>, Option<&str>)> = Vec::new();
    if let Some(root) = index.root() {
        stack.push((root, None, None));
    }

    while let Some((node, lower, upper)) = stack.pop() {
        let key = node.key();
        assert_eq!(key, fold(node.record().title()), "stale key on {}", node.record());
        if let Some(lower) = lower {
            assert!(key >= lower, "{} sits right of '{}'", node.record(), lower);
        }
        if let Some(upper) = upper {
            assert!(key < upper, "{} sits left of '{}'", node.record(), upper);
        }
        if let Some(left) = node.left() {
            stack.push((left, lower, Some(key)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(key), upper));
        }
    }
}

pub const RECORDS_JSON: &str = r#"[
    {
        "id": 11,
        "title": "Solaris",
        "author": "Stanislaw Lem",
        "genre": "Science Fiction",
        "isbn": "978-0156027601",
        "cover_url": "https://covers.example/solaris.jpg"
    },
    {
        "id": 12,
        "title": "Kindred",
        "author": "Octavia E. Butler",
        "genre": "Science Fiction",
        "editorial": "Beacon Press",
        "stock": 4
    },
    {
        "id": 13,
        "title": "Middlemarch",
        "author": "George Eliot",
        "genre": "Classic"
    }
]"#;

/// Parses a JSON array of records, keeping unknown keys as extras.
pub fn load_records(json: &str) -> FolioResult<Vec<Record>> {
    serde_json::from_str(json).map_err(|e| {
        FolioError::new(
            &format!("Invalid record fixture: {}", e),
            ErrorKind::EncodingError,
        )
    })
}
