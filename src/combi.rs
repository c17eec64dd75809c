use std::collections::BTreeSet;

use itertools::Itertools;

use crate::{
    config::CandidateStrategy,
    types::{ItemId, Itemset, ItemsetCounts, ItemsetLength},
};

/// Candidates of length `size` built from the frequent itemsets of length
/// `size - 1`. The result is deduplicated and in canonical order.
pub fn generate_candidates(
    prev: &ItemsetCounts,
    size: ItemsetLength,
    strategy: CandidateStrategy,
) -> Vec<Itemset> {
    match strategy {
        CandidateStrategy::Pairwise => pairwise_union(prev, size),
        CandidateStrategy::PrefixJoin => {
            let itemsets: Vec<Itemset> = prev.keys().cloned().collect();
            join_step(itemsets)
                .into_iter()
                .filter(|candidate| {
                    candidate.len() == size && has_frequent_subsets(candidate, prev)
                })
                .collect()
        }
    }
}

/// Every pair of frequent itemsets whose union has exactly `size` items.
/// Pairs need not share a prefix; candidates that turn out infrequent are
/// dropped by the support check.
fn pairwise_union(prev: &ItemsetCounts, size: ItemsetLength) -> Vec<Itemset> {
    let mut candidates: BTreeSet<Itemset> = BTreeSet::new();

    for (a, b) in prev.keys().tuple_combinations() {
        let union: Itemset = a.iter().merge(b.iter()).dedup().copied().collect();
        if union.len() == size {
            candidates.insert(union);
        }
    }

    candidates.into_iter().collect()
}

/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    itemsets.retain(|itemset| !itemset.is_empty());
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<Itemset> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (itemset_first, itemset_last) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        tail_items.push(itemset_last[0]);

        let mut skip = 1;
        for itemset_n in &itemsets[(i + 1)..] {
            let (itemset_n_first, itemset_n_last) = itemset_n.split_at(itemset_n.len() - 1);
            if itemset_n.len() == itemsets[i].len() && itemset_first == itemset_n_first {
                tail_items.push(itemset_n_last[0]);
                skip += 1;
            } else {
                break;
            }
        }

        // tails are ascending because the itemsets are sorted
        for (a, b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(itemset_first.len() + 2);
            candidate.extend_from_slice(itemset_first);
            candidate.push(*a);
            candidate.push(*b);
            final_itemsets.push(candidate);
        }

        i += skip;
    }

    final_itemsets
}

/// Apriori pruning: every subset one item smaller must itself be frequent.
fn has_frequent_subsets(candidate: &[ItemId], prev: &ItemsetCounts) -> bool {
    (0..candidate.len()).all(|skipped| {
        let subset: Itemset = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skipped)
            .map(|(_, &item)| item)
            .collect();
        prev.contains_key(&subset)
    })
}
