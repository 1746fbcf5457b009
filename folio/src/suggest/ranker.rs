use itertools::Itertools;

use crate::common::fold;
use crate::config::{FolioConfig, DEFAULT_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_MAX_DISTANCE};
use crate::record::Record;

use super::levenshtein;

/// Bounds for a suggestion query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// At most this many suggestions are returned.
    pub max_results: usize,
    /// Records farther than this from the term are dropped.
    pub max_distance: usize,
}

impl SuggestOptions {
    pub fn new(max_results: usize, max_distance: usize) -> Self {
        SuggestOptions {
            max_results,
            max_distance,
        }
    }

    /// Reads the configured defaults.
    pub fn from_config(config: &FolioConfig) -> Self {
        SuggestOptions::new(config.suggestion_limit(), config.suggestion_max_distance())
    }
}

impl Default for SuggestOptions {
    fn default() -> Self {
        SuggestOptions::new(DEFAULT_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_MAX_DISTANCE)
    }
}

/// A record close to the search term, with its edit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub record: &'a Record,
    /// The smaller of the distances to the title and to the author.
    pub distance: usize,
}

/// Edit distance between an already folded term and a record: the minimum of
/// the distances to its title and to its author.
pub fn record_distance(folded_term: &str, record: &Record) -> usize {
    let title = levenshtein(folded_term, &fold(record.title()));
    let author = levenshtein(folded_term, &fold(record.author()));
    title.min(author)
}

/// Ranks `records` by closeness to `term`.
///
/// Every record is scored, those within `options.max_distance` are kept and
/// sorted by ascending distance. The sort is stable, so records at the same
/// distance stay in the order `records` produced them; the index passes an
/// in-order walk, which makes ties come out in title order. At most
/// `options.max_results` suggestions are returned.
pub fn rank<'a, I>(records: I, term: &str, options: SuggestOptions) -> Vec<Suggestion<'a>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let folded_term = fold(term);
    records
        .into_iter()
        .filter_map(|record| {
            let distance = record_distance(&folded_term, record);
            (distance <= options.max_distance).then_some(Suggestion { record, distance })
        })
        .sorted_by_key(|suggestion| suggestion.distance)
        .take(options.max_results)
        .collect()
}

/// Result of a search that falls back to suggestions.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<'a> {
    /// The general search found records, in title order.
    Matches(Vec<&'a Record>),
    /// Nothing matched; these are the closest records instead.
    Suggestions(Vec<&'a Record>),
    /// Nothing matched and nothing was close enough.
    Nothing,
}

impl<'a> LookupOutcome<'a> {
    /// The records carried by the outcome, matches or suggestions alike.
    pub fn records(&self) -> &[&'a Record] {
        match self {
            LookupOutcome::Matches(records) | LookupOutcome::Suggestions(records) => records,
            LookupOutcome::Nothing => &[],
        }
    }

    pub fn is_suggestion(&self) -> bool {
        matches!(self, LookupOutcome::Suggestions(_))
    }
}
