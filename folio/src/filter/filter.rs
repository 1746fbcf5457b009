use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use crate::record::Record;

/// Trait for implementing record filters.
///
/// A `FilterProvider` decides whether a single record matches. Filters are
/// pure: they read the record and nothing else, and the index applies them
/// during an in-order walk, so matches always come back in title order.
pub trait FilterProvider: Send + Sync + Display {
    /// Returns true if `record` matches the filter.
    fn apply(&self, record: &Record) -> bool;
}

/// A shareable, type-erased filter.
///
/// `Filter` wraps any [FilterProvider] behind an `Arc`, so it is cheap to
/// clone and can be combined with [Filter::and] and [Filter::or].
///
/// # Examples
///
/// ```rust
/// use folio::filter::field;
///
/// let filter = field("author").contains("herbert").and(field("genre").contains("fiction"));
/// assert_eq!(filter.to_string(), "((author ~ herbert) && (genre ~ fiction))");
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Creates a new filter from a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter {
            inner: Arc::new(inner),
        }
    }

    /// Matches records accepted by both filters.
    pub fn and(self, other: Filter) -> Filter {
        Filter::new(AndFilter::new(vec![self, other]))
    }

    /// Matches records accepted by either filter.
    pub fn or(self, other: Filter) -> Filter {
        Filter::new(OrFilter::new(vec![self, other]))
    }
}

impl Deref for Filter {
    type Target = dyn FilterProvider;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Matches every record.
pub(crate) struct AllFilter;

impl Display for AllFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(all)")
    }
}

impl FilterProvider for AllFilter {
    #[inline]
    fn apply(&self, _record: &Record) -> bool {
        true
    }
}

/// Matches records accepted by every inner filter.
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            write!(f, "{}", filter)?;
        }
        write!(f, ")")
    }
}

impl FilterProvider for AndFilter {
    fn apply(&self, record: &Record) -> bool {
        self.filters.iter().all(|filter| filter.apply(record))
    }
}

/// Matches records accepted by at least one inner filter.
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, " || ")?;
            }
            write!(f, "{}", filter)?;
        }
        write!(f, ")")
    }
}

impl FilterProvider for OrFilter {
    fn apply(&self, record: &Record) -> bool {
        self.filters.iter().any(|filter| filter.apply(record))
    }
}
