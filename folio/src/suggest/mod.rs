//! "Did you mean" suggestions.
//!
//! The ranker is stateless: it takes records from any walk of the index and
//! orders the close ones by edit distance to the search term.

mod levenshtein;
mod ranker;

pub use levenshtein::levenshtein;
pub use ranker::*;
