use std::mem;

use crate::item::{Item, Rank};
use crate::suffix::Suffix;

/// A trie node. Children are owned exclusively by their parent and are kept
/// ordered by `max_rank`, highest first.
pub(crate) struct Node<V, R> {
    pub(crate) suffix: Suffix,
    pub(crate) item: Option<Item<V, R>>,
    /// Highest rank of `item` and everything below this node.
    pub(crate) max_rank: R,
    pub(crate) children: Vec<Node<V, R>>,
}

impl<V, R: Rank> Node<V, R> {
    pub(crate) fn new_root() -> Self {
        Self {
            suffix: Suffix::default(),
            item: None,
            max_rank: R::zero(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn new_leaf(suffix: Suffix, item: Item<V, R>) -> Self {
        Self {
            suffix,
            max_rank: item.rank,
            item: Some(item),
            children: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn new_inner(suffix: Suffix, max_rank: R) -> Self {
        Self {
            suffix,
            item: None,
            max_rank,
            children: Vec::new(),
        }
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.len()
    }

    /// True if at least one item lives at or below this node.
    pub(crate) fn has_items(&self) -> bool {
        self.item.is_some() || !self.children.is_empty()
    }

    #[inline]
    pub(crate) fn raise_max_rank(&mut self, rank: R) {
        if rank > self.max_rank {
            self.max_rank = rank;
        }
    }

    /// Adds a child behind every sibling whose `max_rank` is at least as high,
    /// so equal ranks keep the order they arrived in.
    pub(crate) fn add_child(&mut self, child: Node<V, R>) {
        let pos = self
            .children
            .iter()
            .position(|c| c.max_rank < child.max_rank)
            .unwrap_or(self.children.len());
        self.children.insert(pos, child);
    }

    /// Moves the child at `idx` towards the front until the siblings are
    /// ordered by `max_rank` again, returning its new index. Only needed after
    /// that child's rank grew.
    pub(crate) fn reposition_child(&mut self, idx: usize) -> usize {
        let mut i = idx;
        while i > 0 && self.children[i - 1].max_rank < self.children[i].max_rank {
            self.children.swap(i - 1, i);
            i -= 1;
        }
        i
    }
}

// Chains of nested terms can be far deeper than the call stack, so subtrees
// are torn down from a worklist instead of recursively.
impl<V, R> Drop for Node<V, R> {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::item::Item;
    use crate::suffix::Suffix;

    fn leaf(term: &str, rank: u64) -> Node<(), u64> {
        let suffix = Suffix::from_slice(term.as_bytes());
        Node::new_leaf(suffix, Item::new(term, rank, ()))
    }

    fn ranks(node: &Node<(), u64>) -> Vec<u64> {
        node.children.iter().map(|c| c.max_rank).collect()
    }

    #[test]
    fn test_add_child_keeps_rank_order() {
        let mut root = Node::<(), u64>::new_root();
        root.add_child(leaf("b", 3));
        root.add_child(leaf("a", 7));
        root.add_child(leaf("c", 5));
        root.add_child(leaf("d", 5));
        assert_eq!(ranks(&root), vec![7, 5, 5, 3]);
        // Ties keep arrival order.
        assert_eq!(root.children[1].suffix.to_slice(), b"c");
        assert_eq!(root.children[2].suffix.to_slice(), b"d");
        assert_eq!(root.num_children(), 4);
        assert!(root.has_items());
    }

    #[test]
    fn test_reposition_child() {
        let mut root = Node::<(), u64>::new_root();
        root.add_child(leaf("a", 9));
        root.add_child(leaf("b", 4));
        root.add_child(leaf("c", 2));
        root.children[2].raise_max_rank(5);
        assert_eq!(root.reposition_child(2), 1);
        assert_eq!(ranks(&root), vec![9, 5, 4]);
        assert_eq!(root.children[1].suffix.to_slice(), b"c");
    }

    #[test]
    fn test_empty_root() {
        let root = Node::<(), u64>::new_root();
        assert_eq!(root.num_children(), 0);
        assert!(!root.has_items());
        assert_eq!(root.max_rank, 0);
    }
}
