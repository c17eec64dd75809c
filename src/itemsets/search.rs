use tracing::{debug, info};

use crate::{
    combi::generate_candidates,
    config::MiningConfig,
    itemsets::count::{count_candidates, SupportCounter},
    store::TransactionDatabase,
    types::{FrequentItemsets, Itemset},
};

/// Level-wise Apriori search.
///
/// Level 1 is always present in the result, even when empty. Every later
/// level is recorded only if it holds at least one frequent itemset, and the
/// search stops at the first empty level or once `max_len` is reached.
pub fn generate_frequent_itemsets(
    db: &TransactionDatabase,
    config: &MiningConfig,
) -> FrequentItemsets {
    let mut all_frequent_itemsets = FrequentItemsets::new();
    let min_support_count = config.min_support().to_count(db.len());
    let counter = SupportCounter::new(db, config.counting());

    info!(
        transactions = db.len(),
        items = db.num_items(),
        min_support_count,
        "Mining frequent itemsets"
    );

    // 1-itemset
    info!("Counting itemsets of length 1");
    let candidates: Vec<Itemset> = db.items().map(|item| vec![item]).collect();
    let frequent = count_candidates(candidates, &counter, min_support_count, config.parallel());
    debug!(frequent = frequent.len(), "Finished length 1");
    all_frequent_itemsets.insert(1, frequent);

    // k-itemset, k >= 2
    let mut size = 1;
    loop {
        if config.max_len().map_or(false, |max_len| size >= max_len) {
            debug!(size, "Reached max itemset length");
            break;
        }
        let prev = &all_frequent_itemsets[&size];
        if prev.is_empty() {
            break;
        }

        let next_size = size + 1;
        info!("Counting itemsets of length {}", next_size);
        let candidates = generate_candidates(prev, next_size, config.candidates());
        debug!(candidates = candidates.len(), "Generated candidates");

        let frequent =
            count_candidates(candidates, &counter, min_support_count, config.parallel());
        debug!(frequent = frequent.len(), "Finished length {}", next_size);
        if frequent.is_empty() {
            break;
        }

        all_frequent_itemsets.insert(next_size, frequent);
        size = next_size;
    }

    all_frequent_itemsets
}
