//! Shared, swappable access to the current title index.
//!
//! A rebuild never touches the index readers are using. It builds a fresh
//! [TitleIndex] off to the side and then publishes it with a single pointer
//! swap, so a reader sees either the old tree or the new one, never a tree
//! that is half cleared.

use std::sync::Arc;

use itertools::Itertools;
use parking_lot::RwLock;

use crate::common::fold;
use crate::config::FolioConfig;
use crate::errors::{ErrorKind, FolioError, FolioResult};
use crate::index::{IndexStatistics, TitleIndex};
use crate::record::Record;

/// What a rebuild does with a record the index rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebuildPolicy {
    /// Abort the rebuild and keep serving the previous index.
    #[default]
    Halt,
    /// Log the record, leave it out and carry on.
    Skip,
}

/// Outcome of a successful rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildReport {
    pub ingested: usize,
    pub skipped: usize,
}

/// A cloneable handle to the published title index.
///
/// All clones share the same slot. Readers take a [Catalog::snapshot] and
/// query it for as long as they like; a concurrent [Catalog::rebuild] replaces
/// the slot's content without disturbing snapshots already handed out.
///
/// # Examples
///
/// ```rust
/// use folio::catalog::{Catalog, RebuildPolicy};
/// use folio::record::Record;
///
/// let catalog = Catalog::new();
/// let report = catalog.rebuild(
///     vec![
///         Record::new("Foundation", "Isaac Asimov", "Science Fiction"),
///         Record::new("Dune", "Frank Herbert", "Science Fiction"),
///     ],
///     RebuildPolicy::Halt,
/// )?;
/// assert_eq!(report.ingested, 2);
///
/// let index = catalog.snapshot();
/// assert!(index.find_by_title("dune").is_some());
/// # Ok::<(), folio::errors::FolioError>(())
/// ```
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    current: RwLock<Arc<TitleIndex>>,
    config: FolioConfig,
}

impl Catalog {
    /// Creates a catalog serving an empty index with the default configuration.
    pub fn new() -> Self {
        Catalog::with_config(FolioConfig::default())
    }

    /// Creates a catalog whose indexes use `config`.
    pub fn with_config(config: FolioConfig) -> Self {
        Catalog {
            inner: Arc::new(CatalogInner {
                current: RwLock::new(Arc::new(TitleIndex::with_config(config.clone()))),
                config,
            }),
        }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.inner.config
    }

    /// The index currently published.
    pub fn snapshot(&self) -> Arc<TitleIndex> {
        self.inner.current.read().clone()
    }

    pub fn statistics(&self) -> IndexStatistics {
        self.snapshot().statistics()
    }

    /// Replaces the published index with one built from `records`.
    ///
    /// Records are ingested in ascending case-insensitive title order; ties
    /// keep the order they were given in. The new index is only published once
    /// every record has been ingested.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the configuration is invalid, or if a
    /// record is rejected under [RebuildPolicy::Halt]. In both cases the
    /// previous index stays published.
    pub fn rebuild<I>(&self, records: I, policy: RebuildPolicy) -> FolioResult<RebuildReport>
    where
        I: IntoIterator<Item = Record>,
    {
        self.inner.config.validate()?;

        let records = records
            .into_iter()
            .sorted_by_cached_key(|record| fold(record.title()))
            .collect_vec();
        log::debug!("Rebuilding title index from {} records", records.len());

        let mut index = TitleIndex::with_config(self.inner.config.clone());
        let mut report = RebuildReport::default();
        for record in records {
            match index.ingest(record) {
                Ok(()) => report.ingested += 1,
                Err(e) if policy == RebuildPolicy::Skip => {
                    log::warn!("Skipping record during rebuild: {}", e);
                    report.skipped += 1;
                }
                Err(e) => {
                    log::error!("Rebuild aborted, keeping previous index: {}", e);
                    return Err(FolioError::new_with_cause(
                        "Rebuild aborted by a malformed record",
                        ErrorKind::ValidationError,
                        e,
                    ));
                }
            }
        }

        self.publish(index);
        log::info!(
            "Published title index with {} records ({} skipped)",
            report.ingested,
            report.skipped
        );
        Ok(report)
    }

    /// Publishes an empty index.
    pub fn clear(&self) {
        self.publish(TitleIndex::with_config(self.inner.config.clone()));
        log::info!("Published empty title index");
    }

    fn publish(&self, index: TitleIndex) {
        let previous = {
            let mut current = self.inner.current.write();
            std::mem::replace(&mut *current, Arc::new(index))
        };
        // the old tree is dropped outside the lock, unless a reader still holds it
        drop(previous);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
