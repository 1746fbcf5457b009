//! Catalog records and the fields the index can search on.

mod field;
mod record;

pub use field::*;
pub use record::*;
