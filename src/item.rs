use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

/// Unsigned integer types usable as an item's rank. Higher ranks win.
pub trait Rank: PrimInt + Unsigned + Debug {}
impl<T: PrimInt + Unsigned + Debug> Rank for T {}

/// An entry stored in a [`PruningRadixTrie`](crate::PruningRadixTrie).
///
/// Terms must be distinct across a trie; see
/// [`Duplicates`](crate::Duplicates) for how repeats are handled at build time.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Item<V, R = u64> {
    pub term: String,
    pub rank: R,
    pub value: V,
}

impl<V, R: Rank> Item<V, R> {
    pub fn new(term: impl Into<String>, rank: R, value: V) -> Self {
        Self {
            term: term.into(),
            rank,
            value,
        }
    }
}
