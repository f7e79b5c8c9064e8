use crate::{Duplicates, Item, PruningRadixTrie, TrieBuilder};

use proptest::prelude::*;
use std::collections::BTreeMap;

fn brute_force<'a>(
    items: &'a [Item<usize, u32>],
    prefix: &str,
    k: usize,
) -> Vec<&'a Item<usize, u32>> {
    let mut matching: Vec<_> = items
        .iter()
        .filter(|i| i.term.starts_with(prefix))
        .collect();
    matching.sort_by(|a, b| b.rank.cmp(&a.rank));
    matching.truncate(k);
    matching
}

fn to_items(terms: BTreeMap<String, u32>) -> Vec<Item<usize, u32>> {
    terms
        .into_iter()
        .enumerate()
        .map(|(idx, (term, rank))| Item::new(term, rank, idx))
        .collect()
}

/// Distinct terms over a small alphabet, so prefixes overlap heavily. Ranks
/// may repeat.
fn items_strategy() -> impl Strategy<Value = Vec<Item<usize, u32>>> {
    prop::collection::btree_map("[abc]{0,6}", 0u32..20, 0..80).prop_map(to_items)
}

/// Distinct terms with distinct ranks, so the expected answer is unique.
fn unique_rank_items_strategy() -> impl Strategy<Value = Vec<Item<usize, u32>>> {
    prop::collection::btree_set("[abcd]{1,6}", 0..80).prop_flat_map(|terms| {
        let ranks: Vec<u32> = (1..=terms.len() as u32).collect();
        (Just(terms), Just(ranks).prop_shuffle()).prop_map(|(terms, ranks)| {
            terms
                .into_iter()
                .zip(ranks)
                .enumerate()
                .map(|(idx, (term, rank))| Item::new(term, rank, idx))
                .collect::<Vec<_>>()
        })
    })
}

proptest! {
    #[test]
    fn prop_top_k_matches_brute_force(
        items in items_strategy(),
        prefix in "[abc]{0,4}",
        k in 0usize..10,
    ) {
        let trie = PruningRadixTrie::from_items(items.clone()).unwrap();
        trie.assert_invariants();

        let got = trie.top_k(&prefix, k);
        let want = brute_force(&items, &prefix, k);

        prop_assert_eq!(got.len(), want.len());
        let got_ranks: Vec<_> = got.iter().map(|i| i.rank).collect();
        let want_ranks: Vec<_> = want.iter().map(|i| i.rank).collect();
        prop_assert_eq!(got_ranks, want_ranks);
        prop_assert!(got.iter().all(|i| i.term.starts_with(prefix.as_str())));

        let mut terms: Vec<_> = got.iter().map(|i| i.term.as_str()).collect();
        terms.sort_unstable();
        terms.dedup();
        prop_assert_eq!(terms.len(), got.len());
    }

    #[test]
    fn prop_unique_ranks_give_exact_answer(
        items in unique_rank_items_strategy(),
        prefix in "[abcd]{0,3}",
        k in 1usize..12,
    ) {
        let trie = PruningRadixTrie::from_items(items.clone()).unwrap();
        let got: Vec<_> = trie.top_k(&prefix, k).into_iter().map(|i| i.value).collect();
        let want: Vec<_> = brute_force(&items, &prefix, k).into_iter().map(|i| i.value).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_every_item_is_reachable(items in items_strategy()) {
        let trie = PruningRadixTrie::from_items(items.clone()).unwrap();
        prop_assert_eq!(trie.len(), items.len());
        prop_assert_eq!(trie.iter().count(), items.len());
        for item in &items {
            prop_assert_eq!(trie.get(&item.term), Some(item));
            prop_assert!(trie.contains_prefix(&item.term));

            let matching = items.iter().filter(|i| i.term.starts_with(item.term.as_str())).count();
            let found = trie.top_k(&item.term, matching);
            prop_assert!(found.iter().any(|i| i.term == item.term));
        }
    }

    #[test]
    fn prop_queries_are_repeatable(
        items in items_strategy(),
        prefix in "[abc]{0,3}",
        k in 0usize..8,
    ) {
        let trie = PruningRadixTrie::from_items(items).unwrap();
        let first = trie.top_k(&prefix, k);
        let mut buffer = Vec::new();
        let second = trie.top_k_into(&prefix, k, &mut buffer);
        prop_assert_eq!(first.as_slice(), second);
        prop_assert!(first.windows(2).all(|w| w[0].rank >= w[1].rank));
    }

    #[test]
    fn prop_pruning_never_visits_more_than_the_subtree(
        items in items_strategy(),
        prefix in "[abc]{0,3}",
        k in 0usize..8,
    ) {
        let trie = PruningRadixTrie::from_items(items.clone()).unwrap();
        let (best, visited, subtree) = trie.top_k_with_visits(&prefix, k);
        prop_assert!(visited <= subtree, "visited {} of {}", visited, subtree);
        prop_assert_eq!(best, trie.top_k(&prefix, k));

        // With room for every match, nothing may be skipped.
        let (all, visited, subtree) = trie.top_k_with_visits(&prefix, items.len() + 1);
        prop_assert_eq!(all.len(), brute_force(&items, &prefix, items.len() + 1).len());
        prop_assert_eq!(visited, subtree);
    }

    #[test]
    fn prop_keep_last_matches_map(pairs in prop::collection::vec(("[ab]{0,4}", 0u32..10), 0..40)) {
        let items: Vec<_> = pairs
            .iter()
            .enumerate()
            .map(|(idx, (term, rank))| Item::new(term.clone(), *rank, idx))
            .collect();
        let mut expected = BTreeMap::new();
        for item in &items {
            expected.insert(item.term.clone(), item.clone());
        }

        let trie = TrieBuilder::new().duplicates(Duplicates::KeepLast).build(items).unwrap();
        trie.assert_invariants();
        prop_assert_eq!(trie.len(), expected.len());
        for (term, item) in &expected {
            prop_assert_eq!(trie.get(term), Some(item));
        }
    }
}
