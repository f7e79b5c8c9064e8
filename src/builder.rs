//! Batch construction of a [`PruningRadixTrie`].

use std::collections::{HashMap, HashSet};
use std::mem;

use crate::error::{BuildError, Result};
use crate::item::{Item, Rank};
use crate::node::Node;
use crate::suffix::{Comparison, Suffix};
use crate::trie::PruningRadixTrie;

/// What to do when the same term shows up more than once in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// Fail with [`BuildError::DuplicateTerm`].
    #[default]
    Reject,
    /// The occurrence appearing last in the input replaces earlier ones.
    KeepLast,
}

/// Options for building a [`PruningRadixTrie`].
///
/// ```rust
/// use prtrie::{Duplicates, Item, TrieBuilder};
///
/// let items = vec![Item::new("cat", 5u64, ()), Item::new("cat", 8, ())];
/// let trie = TrieBuilder::new()
///     .duplicates(Duplicates::KeepLast)
///     .build(items)
///     .unwrap();
/// assert_eq!(trie.get("cat").map(|i| i.rank), Some(8));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TrieBuilder {
    duplicates: Duplicates,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Builds an immutable trie from `items`.
    pub fn build<V, R, I>(&self, items: I) -> Result<PruningRadixTrie<V, R>>
    where
        R: Rank,
        I: IntoIterator<Item = Item<V, R>>,
    {
        let mut items: Vec<Item<V, R>> = items.into_iter().collect();
        match self.duplicates {
            Duplicates::Reject => reject_duplicates(&items)?,
            Duplicates::KeepLast => items = keep_last(items),
        }

        // Highest rank first: every later insertion has a rank no higher than
        // what is already recorded along its path, so sibling order holds
        // without reshuffling. The sort is stable, so ties keep input order.
        items.sort_by(|a, b| b.rank.cmp(&a.rank));

        let len = items.len();
        let mut root = Node::new_root();
        let mut nodes = 1;
        for item in items {
            nodes += insert(&mut root, item);
        }

        tracing::debug!(items = len, nodes, "built pruning radix trie");
        Ok(PruningRadixTrie::from_root(root, len))
    }
}

fn reject_duplicates<V, R>(items: &[Item<V, R>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.term.as_str()) {
            return Err(BuildError::DuplicateTerm {
                term: item.term.clone(),
            });
        }
    }
    Ok(())
}

fn keep_last<V, R>(items: Vec<Item<V, R>>) -> Vec<Item<V, R>> {
    let keep: Vec<bool> = {
        let mut last = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            last.insert(item.term.as_str(), idx);
        }
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| last[item.term.as_str()] == idx)
            .collect()
    };

    let before = items.len();
    let items: Vec<_> = items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect();
    if items.len() != before {
        tracing::debug!(dropped = before - items.len(), "replaced duplicate terms");
    }
    items
}

/// Inserts `item` below `root` and returns how many nodes were created.
fn insert<V, R: Rank>(root: &mut Node<V, R>, item: Item<V, R>) -> usize {
    let mut cur_node = root;
    let mut depth = 0;
    loop {
        cur_node.raise_max_rank(item.rank);

        // Only the root is ever reached with nothing left: the empty term.
        if item.term.len() == depth {
            debug_assert!(cur_node.item.is_none(), "duplicate empty term");
            cur_node.item = Some(item);
            return 0;
        }

        let remaining = &item.term.as_bytes()[depth..];
        let found = cur_node
            .children
            .iter()
            .enumerate()
            .map(|(idx, child)| (idx, child.suffix.compare(remaining)))
            .find(|(_, (cmp, _))| *cmp != Comparison::NoMatch);

        let Some((idx, (cmp, common))) = found else {
            let leaf_suffix = Suffix::from_slice(remaining);
            cur_node.add_child(Node::new_leaf(leaf_suffix, item));
            return 1;
        };

        if cmp == Comparison::Superkey {
            cur_node.children[idx].raise_max_rank(item.rank);
            let idx = cur_node.reposition_child(idx);
            cur_node = &mut cur_node.children[idx];
            depth += common;
            continue;
        }

        let child = &mut cur_node.children[idx];
        let created = match cmp {
            Comparison::Equal => {
                // A longer term created this path first.
                debug_assert!(child.item.is_none(), "duplicate term {:?}", item.term);
                child.raise_max_rank(item.rank);
                child.item = Some(item);
                0
            }
            Comparison::Subkey => {
                // The new term ends inside the child's suffix: it becomes the
                // child's new parent.
                let parent_suffix = child.suffix.partial_before(common);
                let tail = child.suffix.partial_after(common);
                let max_rank = child.max_rank.max(item.rank);

                let mut old = mem::replace(child, Node::new_inner(parent_suffix, max_rank));
                old.suffix = tail;
                child.item = Some(item);
                child.add_child(old);
                1
            }
            Comparison::SharedPrefix => {
                // Diverging mid-suffix: split into an item-less node over the
                // shared run with the old child and a new leaf beneath it.
                let shared = child.suffix.partial_before(common);
                let tail = child.suffix.partial_after(common);
                let max_rank = child.max_rank.max(item.rank);
                let leaf_suffix = Suffix::from_slice(&item.term.as_bytes()[depth + common..]);

                let mut old = mem::replace(child, Node::new_inner(shared, max_rank));
                old.suffix = tail;
                child.add_child(old);
                child.add_child(Node::new_leaf(leaf_suffix, item));
                2
            }
            Comparison::NoMatch | Comparison::Superkey => {
                unreachable!("comparison {:?} handled above", cmp)
            }
        };
        cur_node.reposition_child(idx);
        return created;
    }
}
