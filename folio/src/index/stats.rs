use std::fmt::{Display, Formatter};

/// Read-only snapshot of the shape of a [crate::index::TitleIndex].
///
/// Used by health and consistency reporting: after a rebuild, `count` should
/// equal the number of records in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexStatistics {
    pub count: usize,
    pub height: usize,
    pub width: usize,
    pub is_empty: bool,
}

impl Display for IndexStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "count={} height={} width={} empty={}",
            self.count, self.height, self.width, self.is_empty
        )
    }
}
