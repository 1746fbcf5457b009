//! Index configuration.
//!
//! This module holds the defaults the index falls back to when a caller does
//! not pass explicit query parameters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::{ErrorKind, FolioError, FolioResult};
use crate::record::RecordField;

/// Default number of suggestions returned by a "did you mean" lookup.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Default maximum edit distance for a suggestion to be kept.
pub const DEFAULT_SUGGESTION_MAX_DISTANCE: usize = 3;

/// Index configuration wrapper.
///
/// A cloneable, thread-safe configuration holder. Clones share the same
/// settings, so a change made through one handle is seen by every index built
/// from it.
///
/// # Example
///
/// ```rust
/// use folio::config::FolioConfig;
/// use folio::record::RecordField;
///
/// let config = FolioConfig::new()
///     .with_suggestion_limit(10)
///     .with_suggestion_max_distance(2)
///     .with_prefix_field(RecordField::Author);
///
/// assert_eq!(config.suggestion_limit(), 10);
/// ```
#[derive(Clone)]
pub struct FolioConfig {
    inner: Arc<FolioConfigInner>,
}

/// Internal configuration storage.
struct FolioConfigInner {
    /// Maximum number of suggestions returned.
    suggestion_limit: AtomicUsize,

    /// Maximum edit distance of a kept suggestion.
    suggestion_max_distance: AtomicUsize,

    /// Field used by prefix searches when the caller does not pick one.
    prefix_field: RwLock<RecordField>,
}

impl FolioConfig {
    /// Creates a new configuration with default values.
    ///
    /// Defaults:
    /// - Suggestion limit: 5
    /// - Suggestion max distance: 3
    /// - Prefix field: title
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(FolioConfigInner::new()),
        }
    }

    #[inline]
    pub fn suggestion_limit(&self) -> usize {
        self.inner.suggestion_limit.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_suggestion_limit(&self, limit: usize) {
        self.inner.suggestion_limit.store(limit, Ordering::Relaxed);
    }

    /// Sets the suggestion limit.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_suggestion_limit(self, limit: usize) -> Self {
        self.set_suggestion_limit(limit);
        self
    }

    #[inline]
    pub fn suggestion_max_distance(&self) -> usize {
        self.inner.suggestion_max_distance.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_suggestion_max_distance(&self, distance: usize) {
        self.inner
            .suggestion_max_distance
            .store(distance, Ordering::Relaxed);
    }

    /// Sets the suggestion max distance.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_suggestion_max_distance(self, distance: usize) -> Self {
        self.set_suggestion_max_distance(distance);
        self
    }

    pub fn prefix_field(&self) -> RecordField {
        self.inner.prefix_field.read().clone()
    }

    pub fn set_prefix_field(&self, field: RecordField) {
        *self.inner.prefix_field.write() = field;
    }

    /// Sets the default prefix field.
    /// Builder-style method for chaining.
    pub fn with_prefix_field(self, field: RecordField) -> Self {
        self.set_prefix_field(field);
        self
    }

    /// Checks that the settings can serve queries.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the suggestion limit is zero.
    pub fn validate(&self) -> FolioResult<()> {
        if self.suggestion_limit() == 0 {
            log::error!("Suggestion limit must be greater than zero");
            return Err(FolioError::new(
                "Suggestion limit must be greater than zero",
                ErrorKind::ValidationError,
            ));
        }
        Ok(())
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioConfigInner {
    fn new() -> Self {
        Self {
            suggestion_limit: AtomicUsize::new(DEFAULT_SUGGESTION_LIMIT),
            suggestion_max_distance: AtomicUsize::new(DEFAULT_SUGGESTION_MAX_DISTANCE),
            prefix_field: RwLock::new(RecordField::Title),
        }
    }
}
