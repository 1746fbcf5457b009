use std::fmt::{Display, Formatter};

use crate::common::{contains_folded, fold, starts_with_folded};
use crate::record::{Record, RecordField};

use super::FilterProvider;

/// Case-insensitive substring match against one field.
///
/// A record without text for the field (a missing isbn, a numeric extra)
/// never matches. An empty term matches every record that has the field.
pub(crate) struct ContainsFilter {
    field: RecordField,
    term: String,
}

impl ContainsFilter {
    pub(crate) fn new(field: RecordField, term: &str) -> Self {
        ContainsFilter {
            field,
            term: fold(term),
        }
    }
}

impl Display for ContainsFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} ~ {})", self.field, self.term)
    }
}

impl FilterProvider for ContainsFilter {
    #[inline]
    fn apply(&self, record: &Record) -> bool {
        record
            .field_text(&self.field)
            .is_some_and(|text| contains_folded(text, &self.term))
    }
}

/// Case-insensitive starts-with match against one field.
pub(crate) struct PrefixFilter {
    field: RecordField,
    prefix: String,
}

impl PrefixFilter {
    pub(crate) fn new(field: RecordField, prefix: &str) -> Self {
        PrefixFilter {
            field,
            prefix: fold(prefix),
        }
    }
}

impl Display for PrefixFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} ^= {})", self.field, self.prefix)
    }
}

impl FilterProvider for PrefixFilter {
    #[inline]
    fn apply(&self, record: &Record) -> bool {
        record
            .field_text(&self.field)
            .is_some_and(|text| starts_with_folded(text, &self.prefix))
    }
}

/// Case-insensitive substring match against title, author, genre, and isbn
/// and editorial when present. One matching field is enough.
pub(crate) struct AnyFieldContainsFilter {
    term: String,
}

impl AnyFieldContainsFilter {
    pub(crate) fn new(term: &str) -> Self {
        AnyFieldContainsFilter { term: fold(term) }
    }
}

impl Display for AnyFieldContainsFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(* ~ {})", self.term)
    }
}

impl FilterProvider for AnyFieldContainsFilter {
    fn apply(&self, record: &Record) -> bool {
        record
            .searchable_texts()
            .any(|text| contains_folded(text, &self.term))
    }
}
