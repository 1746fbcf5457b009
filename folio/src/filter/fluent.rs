use crate::record::RecordField;

use super::{AllFilter, AnyFieldContainsFilter, ContainsFilter, Filter, PrefixFilter};

/// Creates a fluent filter builder for the specified field.
///
/// Accepts a [RecordField] or a field name; names other than the five named
/// record fields address a passthrough extra.
pub fn field(field: impl Into<RecordField>) -> FluentFilter {
    FluentFilter {
        field: field.into(),
    }
}

/// Creates a builder whose filters look at every searchable field.
pub fn any_field() -> AnyFieldFilter {
    AnyFieldFilter
}

/// Creates a filter that matches every record.
pub fn all() -> Filter {
    Filter::new(AllFilter)
}

/// A fluent builder for filters on a single field.
pub struct FluentFilter {
    field: RecordField,
}

impl FluentFilter {
    /// Matches records whose field contains `term`, ignoring case.
    #[inline]
    pub fn contains(self, term: &str) -> Filter {
        Filter::new(ContainsFilter::new(self.field, term))
    }

    /// Matches records whose field starts with `prefix`, ignoring case.
    #[inline]
    pub fn starts_with(self, prefix: &str) -> Filter {
        Filter::new(PrefixFilter::new(self.field, prefix))
    }
}

/// A fluent builder for filters across all searchable fields.
pub struct AnyFieldFilter;

impl AnyFieldFilter {
    /// Matches records where any searchable field contains `term`, ignoring case.
    #[inline]
    pub fn contains(self, term: &str) -> Filter {
        Filter::new(AnyFieldContainsFilter::new(term))
    }
}
