use crate::common::fold;
use crate::record::Record;

/// One cell of the title tree.
///
/// A node owns its record and both child subtrees outright, so the tree has no
/// shared ownership, no parent pointers and cannot contain a cycle. The
/// case-folded title is computed once on insertion and used for every
/// comparison afterwards.
pub struct Node {
    key: String,
    record: Record,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(record: Record) -> Self {
        Node {
            key: fold(record.title()),
            record,
            left: None,
            right: None,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The case-folded title this node is ordered by.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl Drop for Node {
    // Unlinks the subtree iteratively. A title-sorted rebuild produces a chain
    // as long as the catalog, which the default recursive drop would walk on
    // the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf_with_folded_key() {
        let node = Node::new(Record::new("The Hobbit", "J.R.R. Tolkien", "Fantasy"));
        assert_eq!(node.key(), "the hobbit");
        assert_eq!(node.record().title(), "The Hobbit");
        assert!(node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_dropping_a_long_chain() {
        let mut root = Node::new(Record::new("0", "a", "g"));
        {
            let mut slot = &mut root.right;
            for i in 1..200_000 {
                let node = slot.insert(Box::new(Node::new(Record::new(i.to_string(), "a", "g"))));
                slot = &mut node.right;
            }
        }
        drop(root);
    }
}
