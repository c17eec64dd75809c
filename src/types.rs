use std::collections::BTreeMap;

pub type ItemId = usize;
pub type ItemName = String;

/// Canonical itemset: item ids sorted ascending, no repeats.
pub type Itemset = Vec<ItemId>;

/// One input row after the transaction id has been dropped.
pub type RawTransaction = Vec<ItemName>;
/// Sorted, deduplicated item ids of one transaction.
pub type Transaction = Vec<ItemId>;

pub type SupportCount = usize;
pub type ItemsetCounts = BTreeMap<Itemset, SupportCount>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = BTreeMap<ItemsetLength, ItemsetCounts>;
