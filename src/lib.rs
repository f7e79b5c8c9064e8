//! # prtrie
//!
//! A Pruning Radix Trie: an immutable, prefix-compressed index over
//! `(term, rank, value)` items that answers "top `k` items starting with this
//! prefix" without scanning every match.
//!
//! Each node records the highest rank anywhere beneath it and keeps its
//! children sorted by that bound, so a query stops descending as soon as the
//! remaining subtrees cannot beat the results already collected. The answer is
//! always exact.
//!
//! ```rust
//! use prtrie::{Item, PruningRadixTrie};
//!
//! let trie = PruningRadixTrie::from_items(vec![
//!     Item::new("a", 1u64, "a"),
//!     Item::new("ab", 2, "ab"),
//!     Item::new("abc", 3, "abc"),
//! ])
//! .unwrap();
//!
//! let values: Vec<_> = trie.top_k("ab", 5).iter().map(|i| i.value).collect();
//! assert_eq!(values, vec!["abc", "ab"]);
//! ```

pub use builder::{Duplicates, TrieBuilder};
pub use error::{BuildError, Result};
pub use item::{Item, Rank};
pub use iter::Iter;
pub use stats::TrieStats;
pub use trie::PruningRadixTrie;

pub mod builder;
pub mod error;
pub mod item;
pub mod iter;
mod node;
mod results;
pub mod stats;
pub mod suffix;
pub mod trie;

#[cfg(test)]
mod proptests;
