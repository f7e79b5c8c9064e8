//! The pruning radix trie and its top-k prefix query.

use crate::builder::TrieBuilder;
use crate::error::Result;
use crate::item::{Item, Rank};
use crate::iter::Iter;
use crate::node::Node;
use crate::results::TopK;
use crate::stats::{collect_trie_stats, TrieStats};
use crate::suffix::Comparison;

/// An immutable radix trie answering "best `k` items whose term starts with
/// this prefix" queries.
///
/// Every node caches the highest rank found in its subtree and keeps its
/// children ordered by that rank, so a query can stop scanning siblings as
/// soon as none of them can beat the worst result collected so far.
///
/// ```rust
/// use prtrie::{Item, PruningRadixTrie};
///
/// let trie = PruningRadixTrie::from_items(vec![
///     Item::new("cat", 5u64, ()),
///     Item::new("car", 9, ()),
///     Item::new("cart", 3, ()),
///     Item::new("dog", 7, ()),
/// ])
/// .unwrap();
///
/// let terms: Vec<_> = trie.top_k("ca", 2).iter().map(|i| i.term.as_str()).collect();
/// assert_eq!(terms, vec!["car", "cat"]);
/// assert!(trie.top_k("z", 5).is_empty());
/// ```
///
/// A built trie is never mutated, so it can be shared between threads and
/// queried concurrently.
pub struct PruningRadixTrie<V, R = u64> {
    root: Node<V, R>,
    len: usize,
}

impl<V, R: Rank> Default for PruningRadixTrie<V, R> {
    fn default() -> Self {
        Self::from_root(Node::new_root(), 0)
    }
}

impl<V, R: Rank> PruningRadixTrie<V, R> {
    /// Builds a trie with the default [`TrieBuilder`] options, rejecting
    /// duplicate terms.
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Item<V, R>>,
    {
        TrieBuilder::new().build(items)
    }

    pub(crate) fn from_root(root: Node<V, R>, len: usize) -> Self {
        Self { root, len }
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<V, R> {
        &self.root
    }

    /// Runs a query and also reports how many nodes the search visited and
    /// how many make up the subtree it searched.
    #[cfg(test)]
    pub(crate) fn top_k_with_visits(
        &self,
        prefix: &str,
        k: usize,
    ) -> (Vec<&Item<V, R>>, usize, usize) {
        let mut best = Vec::with_capacity(k);
        let visited = self.fill_top_k(prefix, k, &mut best);
        let subtree = Self::lca_scan(&self.root, prefix.as_bytes())
            .map_or(0, |node| collect_trie_stats(node).num_nodes);
        (best, visited, subtree)
    }

    /// Number of items stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns up to `k` items whose term starts with `prefix`, highest rank
    /// first. Items of equal rank come out in the order the search found them.
    pub fn top_k(&self, prefix: &str, k: usize) -> Vec<&Item<V, R>> {
        let mut best = Vec::with_capacity(k);
        self.fill_top_k(prefix, k, &mut best);
        best
    }

    /// Like [`top_k`](Self::top_k), but writes into `buffer` so repeated
    /// queries can share one allocation. Whatever `buffer` held before is
    /// discarded.
    pub fn top_k_into<'t, 'b>(
        &'t self,
        prefix: &str,
        k: usize,
        buffer: &'b mut Vec<&'t Item<V, R>>,
    ) -> &'b [&'t Item<V, R>] {
        self.fill_top_k(prefix, k, buffer);
        buffer.as_slice()
    }

    /// Runs one query into `best` and returns how many nodes it visited.
    fn fill_top_k<'t>(
        &'t self,
        prefix: &str,
        k: usize,
        best: &mut Vec<&'t Item<V, R>>,
    ) -> usize {
        let mut results = TopK::new(best, k);
        let visited = match Self::lca_scan(&self.root, prefix.as_bytes()) {
            Some(subtree) => Self::walk(subtree, &mut results),
            None => 0,
        };
        tracing::trace!(prefix, k, found = results.len(), visited, "top-k query");
        visited
    }

    /// Returns the lowest node holding every item that starts with `prefix`,
    /// or `None` when no item does.
    fn lca_scan<'a>(cur_node: &'a Node<V, R>, prefix: &[u8]) -> Option<&'a Node<V, R>> {
        let mut cur_node = cur_node;
        let mut depth = 0;
        'descend: loop {
            let remaining = &prefix[depth..];
            if remaining.is_empty() {
                return Some(cur_node);
            }
            for child in &cur_node.children {
                let (cmp, common) = child.suffix.compare(remaining);
                match cmp {
                    Comparison::NoMatch => continue,
                    Comparison::Equal | Comparison::Subkey => return Some(child),
                    Comparison::Superkey => {
                        cur_node = child;
                        depth += common;
                        continue 'descend;
                    }
                    // Siblings never share a first byte, so nothing else can match.
                    Comparison::SharedPrefix => return None,
                }
            }
            return None;
        }
    }

    /// Depth-first walk of `subtree` feeding `results`. Returns the number of
    /// nodes visited.
    fn walk<'a>(subtree: &'a Node<V, R>, results: &mut TopK<'_, 'a, V, R>) -> usize {
        if let Some(item) = &subtree.item {
            results.offer(item);
        }
        let mut visited = 1;
        let mut sibling_stack = vec![subtree.children.iter()];
        while let Some(siblings) = sibling_stack.last_mut() {
            match siblings.next() {
                Some(child) if results.must_walk(child.max_rank) => {
                    visited += 1;
                    if let Some(item) = &child.item {
                        results.offer(item);
                    }
                    sibling_stack.push(child.children.iter());
                }
                // Exhausted, or no later sibling can rank higher than this one.
                _ => {
                    sibling_stack.pop();
                }
            }
        }
        visited
    }

    /// Looks up the item stored under exactly `term`.
    pub fn get(&self, term: &str) -> Option<&Item<V, R>> {
        let key = term.as_bytes();
        let mut cur_node = &self.root;
        let mut depth = 0;
        'descend: loop {
            if depth == key.len() {
                return cur_node.item.as_ref();
            }
            for child in &cur_node.children {
                let (cmp, common) = child.suffix.compare(&key[depth..]);
                match cmp {
                    Comparison::NoMatch => continue,
                    Comparison::Equal => return child.item.as_ref(),
                    Comparison::Superkey => {
                        cur_node = child;
                        depth += common;
                        continue 'descend;
                    }
                    Comparison::Subkey | Comparison::SharedPrefix => return None,
                }
            }
            return None;
        }
    }

    /// Whether any stored term starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        Self::lca_scan(&self.root, prefix.as_bytes()).is_some_and(|n| n.has_items())
    }

    /// Iterates over all items depth first.
    pub fn iter(&self) -> Iter<'_, V, R> {
        Iter::new(&self.root, self.len)
    }

    pub fn stats(&self) -> TrieStats {
        collect_trie_stats(&self.root)
    }
}

impl<'a, V, R: Rank> IntoIterator for &'a PruningRadixTrie<V, R> {
    type Item = &'a Item<V, R>;
    type IntoIter = Iter<'a, V, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<V, R: Rank> PruningRadixTrie<V, R> {
    /// Panics unless every structural property queries rely on holds.
    pub(crate) fn assert_invariants(&self) {
        let mut path = Vec::new();
        let count = Self::assert_invariants_recurse(&self.root, &mut path, true);
        assert_eq!(count, self.len, "item count");
    }

    fn assert_invariants_recurse(
        node: &Node<V, R>,
        path: &mut Vec<u8>,
        is_root: bool,
    ) -> usize {
        let depth = path.len();
        path.extend_from_slice(node.suffix.to_slice());

        if !is_root {
            assert!(!node.suffix.is_empty(), "empty suffix below root");
            assert!(
                node.item.is_some() || node.children.len() >= 2,
                "uncompressed chain at {:?}",
                String::from_utf8_lossy(path)
            );
        }

        let mut count = 0;
        let mut expected_max = None;
        if let Some(item) = &node.item {
            assert_eq!(item.term.as_bytes(), path.as_slice(), "term/path mismatch");
            expected_max = Some(item.rank);
            count += 1;
        }

        for (idx, child) in node.children.iter().enumerate() {
            expected_max = expected_max.max(Some(child.max_rank));
            if idx > 0 {
                let prev = &node.children[idx - 1];
                assert!(prev.max_rank >= child.max_rank, "children out of rank order");
                for other in &node.children[..idx] {
                    assert_ne!(other.suffix.to_slice()[0], child.suffix.to_slice()[0]);
                }
            }
            count += Self::assert_invariants_recurse(child, path, false);
        }

        if let Some(expected) = expected_max {
            assert_eq!(node.max_rank, expected, "stale max rank");
        }

        path.truncate(depth);
        count
    }
}
