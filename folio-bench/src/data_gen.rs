//! Data generators for benchmarks

use fake::faker::barcode::en::Isbn;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::*;
use fake::faker::name::en::*;
use fake::Fake;
use folio::common::fold;
use folio::index::TitleIndex;
use folio::record::Record;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::InsertionOrder;

const GENRES: [&str; 6] = [
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Classic",
    "Horror",
    "Poetry",
];

/// Generate catalog records with fake titles and authors
pub fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let title: String = Sentence(1..5).fake();
            let author: String = Name().fake();
            let genre = GENRES[rng.gen_range(0..GENRES.len())];

            let mut record = Record::new(title, author, genre).with_id(i as u64);
            if rng.gen_bool(0.5) {
                record = record.with_isbn(Isbn().fake::<String>());
            }
            if rng.gen_bool(0.2) {
                record = record.with_editorial(CompanyName().fake::<String>());
            }
            record
        })
        .collect()
}

/// Arrange records in the requested insertion order
pub fn arrange(mut records: Vec<Record>, order: InsertionOrder) -> Vec<Record> {
    match order {
        InsertionOrder::Sorted => records.sort_by_cached_key(|record| fold(record.title())),
        InsertionOrder::Shuffled => records.shuffle(&mut rand::thread_rng()),
    }
    records
}

/// Build an index from generated records in the given order
pub fn build_index(count: usize, order: InsertionOrder) -> TitleIndex {
    let records = arrange(generate_records(count), order);
    TitleIndex::build(records).expect("generated titles are never blank")
}

/// Pick search terms: a few existing titles with a typo, plus unrelated words
pub fn generate_probe_terms(index: &TitleIndex, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let titles: Vec<&str> = index.iter_in_order().map(|record| record.title()).collect();
    (0..count)
        .map(|_| {
            if titles.is_empty() || rng.gen_bool(0.3) {
                Word().fake::<String>()
            } else {
                let title = titles[rng.gen_range(0..titles.len())];
                let mut chars: Vec<char> = title.chars().collect();
                if !chars.is_empty() {
                    let at = rng.gen_range(0..chars.len());
                    chars[at] = 'x';
                }
                chars.into_iter().collect()
            }
        })
        .collect()
}
