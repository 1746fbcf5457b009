//! Borrowing iterators over the title tree.
//!
//! All four walks keep their own explicit stack or queue instead of recursing,
//! so their stack usage does not depend on the height of the tree. They hold no
//! state beyond the iterator itself: starting a new walk always starts from the
//! root.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::index::Node;
use crate::record::Record;

type NodeStack<'a> = SmallVec<[&'a Node; 32]>;

/// Node, then left subtree, then right subtree.
pub struct PreOrder<'a> {
    stack: NodeStack<'a>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        PreOrder {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right goes first so that left is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.record())
    }
}

/// Left subtree, then node, then right subtree. Yields records in ascending
/// case-insensitive title order.
pub struct InOrder<'a> {
    stack: NodeStack<'a>,
    current: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        InOrder {
            stack: SmallVec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node.record())
    }
}

/// Left subtree, then right subtree, then node.
pub struct PostOrder<'a> {
    // the flag marks nodes whose children were already scheduled
    stack: SmallVec<[(&'a Node, bool); 32]>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        PostOrder {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.record());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
        None
    }
}

/// Breadth-first walk, one level at a time, left to right.
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        LevelOrder {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.record())
    }
}

/// Yields the number of nodes on each level of the tree, root level first.
///
/// Each node is dequeued exactly once. The number of items is the height of
/// the tree and the largest item is its width.
pub(crate) struct LevelWidths<'a> {
    current: Vec<&'a Node>,
}

impl<'a> LevelWidths<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        LevelWidths {
            current: root.into_iter().collect(),
        }
    }
}

impl Iterator for LevelWidths<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }
        let width = self.current.len();
        let next_level = self
            .current
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
        self.current = next_level;
        Some(width)
    }
}
