//! Structural statistics for a [`PruningRadixTrie`](crate::PruningRadixTrie).

use crate::item::Rank;
use crate::node::Node;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieStats {
    /// All nodes, the root included.
    pub num_nodes: usize,
    pub num_items: usize,
    /// Nodes below the root that carry no item of their own.
    pub num_inner_nodes: usize,
    /// Nodes on the longest root-to-leaf path; the root alone has height 1.
    pub max_height: usize,
    pub max_fanout: usize,
}

pub(crate) fn collect_trie_stats<V, R: Rank>(root: &Node<V, R>) -> TrieStats {
    let mut stats = TrieStats::default();
    let mut pending = vec![(root, 1)];
    while let Some((node, height)) = pending.pop() {
        stats.num_nodes += 1;
        stats.max_height = stats.max_height.max(height);
        stats.max_fanout = stats.max_fanout.max(node.num_children());
        if node.item.is_some() {
            stats.num_items += 1;
        } else if height > 1 {
            stats.num_inner_nodes += 1;
        }
        pending.extend(node.children.iter().map(|child| (child, height + 1)));
    }
    stats
}
