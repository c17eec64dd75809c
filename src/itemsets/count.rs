use bitvec::prelude::*;
use rayon::prelude::*;

use crate::{
    config::CountingStrategy,
    store::TransactionDatabase,
    types::{ItemId, Itemset, ItemsetCounts, Transaction},
};

/// Number of transactions in `db` that contain every item of `itemset`.
///
/// The empty itemset is contained in every transaction, so its support is
/// `db.len()`.
pub fn support(db: &TransactionDatabase, itemset: &[ItemId]) -> usize {
    db.transactions()
        .iter()
        .filter(|transaction| contains_all(transaction, itemset))
        .count()
}

fn contains_all(transaction: &Transaction, itemset: &[ItemId]) -> bool {
    itemset
        .iter()
        .all(|item| transaction.binary_search(item).is_ok())
}

/// Vertical layout of the database: one bit per transaction for every item.
#[derive(Debug, Clone)]
pub struct TidsetIndex {
    tidsets: Vec<BitVec<usize, Lsb0>>,
    num_transactions: usize,
}

impl TidsetIndex {
    pub fn build(db: &TransactionDatabase) -> Self {
        let num_transactions = db.len();
        let mut tidsets =
            vec![BitVec::<usize, Lsb0>::repeat(false, num_transactions); db.num_items()];

        for (tid, transaction) in db.transactions().iter().enumerate() {
            for &item in transaction {
                tidsets[item].set(tid, true);
            }
        }

        Self {
            tidsets,
            num_transactions,
        }
    }

    pub fn support(&self, itemset: &[ItemId]) -> usize {
        let (first, rest) = match itemset.split_first() {
            Some(split) => split,
            None => return self.num_transactions,
        };
        let mut covered = match self.tidsets.get(*first) {
            Some(bits) => bits.clone(),
            None => return 0,
        };
        for item in rest {
            match self.tidsets.get(*item) {
                Some(bits) => covered &= bits.as_bitslice(),
                None => return 0,
            }
        }
        covered.count_ones()
    }
}

/// Support oracle used by the level-wise search.
#[derive(Debug)]
pub enum SupportCounter<'db> {
    Scan(&'db TransactionDatabase),
    Tidset(TidsetIndex),
}

impl<'db> SupportCounter<'db> {
    pub fn new(db: &'db TransactionDatabase, strategy: CountingStrategy) -> Self {
        match strategy {
            CountingStrategy::Scan => SupportCounter::Scan(db),
            CountingStrategy::Tidset => SupportCounter::Tidset(TidsetIndex::build(db)),
        }
    }

    pub fn support(&self, itemset: &[ItemId]) -> usize {
        match self {
            SupportCounter::Scan(db) => support(db, itemset),
            SupportCounter::Tidset(index) => index.support(itemset),
        }
    }
}

/// Counts every candidate and keeps those whose support reaches
/// `min_support_count`.
pub fn count_candidates(
    candidates: Vec<Itemset>,
    counter: &SupportCounter,
    min_support_count: usize,
    parallel: bool,
) -> ItemsetCounts {
    let keep_frequent = |candidate: Itemset| {
        let candidate_count = counter.support(&candidate);
        if candidate_count >= min_support_count {
            Some((candidate, candidate_count))
        } else {
            None
        }
    };

    if parallel {
        candidates.into_par_iter().filter_map(keep_frequent).collect()
    } else {
        candidates.into_iter().filter_map(keep_frequent).collect()
    }
}
