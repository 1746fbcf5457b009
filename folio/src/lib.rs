//! # Folio - In-Memory Title Index
//!
//! Folio keeps a book catalog in an unbalanced binary search tree ordered by
//! case-insensitive title, and answers the queries a catalog front end needs
//! on top of it.
//!
//! ## Key Features
//!
//! - **Title Ordering**: In-order traversal yields records sorted by title
//! - **Traversals**: Pre-order, in-order, post-order and level-order, all iterative
//! - **Search**: Case-insensitive substring search by author, genre or any field,
//!   plus prefix search and a composable filter API
//! - **Suggestions**: Levenshtein-ranked "did you mean" results
//! - **Tree Shape**: Height, width and per-node neighbourhood queries
//! - **Rebuild As Swap**: [Catalog] publishes a freshly built index atomically
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::catalog::{Catalog, RebuildPolicy};
//! use folio::filter::field;
//! use folio::record::Record;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new();
//! catalog.rebuild(
//!     vec![
//!         Record::new("Dune", "Frank Herbert", "Science Fiction"),
//!         Record::new("Emma", "Jane Austen", "Classic"),
//!         Record::new("Foundation", "Isaac Asimov", "Science Fiction"),
//!     ],
//!     RebuildPolicy::Halt,
//! )?;
//!
//! let index = catalog.snapshot();
//! assert_eq!(index.search_by_genre("science").len(), 2);
//! assert_eq!(index.find(&field("author").contains("austen")).len(), 1);
//!
//! let suggestions = index.suggest("Dume", 5, 3);
//! assert_eq!(suggestions[0].title(), "Dune");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Shared handle that swaps in rebuilt indexes
//! - [`common`] - Text folding helpers and passthrough values
//! - [`config`] - Query defaults
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Record filters and the fluent filter API
//! - [`index`] - The title tree, its traversals and statistics
//! - [`record`] - Catalog records and their fields
//! - [`suggest`] - Edit distance and suggestion ranking

pub mod catalog;
pub mod common;
pub mod config;
pub mod errors;
pub mod filter;
pub mod index;
pub mod record;
pub mod suggest;

pub use catalog::{Catalog, RebuildPolicy, RebuildReport};
pub use errors::{ErrorKind, FolioError, FolioResult};
pub use index::TitleIndex;
pub use record::{Record, RecordField, RecordId};

#[cfg(test)]
mod tests {
    #[ctor::ctor]
    fn init() {
        colog::init();
    }
}
