use crate::item::Item;
use crate::node::Node;

/// Depth-first iterator over every item in a trie. Siblings are visited in
/// stored order, highest `max_rank` first.
pub struct Iter<'a, V, R> {
    node_stack: Vec<&'a Node<V, R>>,
    remaining: usize,
}

impl<'a, V, R> Iter<'a, V, R> {
    pub(crate) fn new(root: &'a Node<V, R>, len: usize) -> Self {
        Self {
            node_stack: vec![root],
            remaining: len,
        }
    }
}

impl<'a, V, R> Iterator for Iter<'a, V, R> {
    type Item = &'a Item<V, R>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.node_stack.pop() {
            self.node_stack.extend(node.children.iter().rev());
            if let Some(item) = &node.item {
                self.remaining -= 1;
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, R> ExactSizeIterator for Iter<'_, V, R> {}
