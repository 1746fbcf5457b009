//! Record filters.
//!
//! Filters decide whether a record matches; [crate::index::TitleIndex::find]
//! applies one during an in-order walk. Build them with [field], [any_field]
//! and [all], or implement [FilterProvider] for a custom predicate.

mod filter;
mod fluent;
mod text_filters;

pub use filter::{Filter, FilterProvider};
pub use fluent::*;

pub(crate) use filter::AllFilter;
pub(crate) use text_filters::{AnyFieldContainsFilter, ContainsFilter, PrefixFilter};
