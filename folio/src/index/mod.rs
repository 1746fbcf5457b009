//! The title-keyed binary search tree and its introspection helpers.

mod node;
mod stats;
mod title_index;
mod traversal;

pub use node::*;
pub use stats::*;
pub use title_index::*;
pub use traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
pub(crate) use traversal::LevelWidths;
