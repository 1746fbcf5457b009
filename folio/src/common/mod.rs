//! Shared building blocks: passthrough values and case-folded text helpers.

mod text;
mod value;

pub use text::*;
pub use value::*;
