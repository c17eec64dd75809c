use std::io::{self, Write};

use itertools::Itertools;

use crate::{
    store::TransactionDatabase,
    types::{FrequentItemsets, ItemId, ItemsetCounts, SupportCount},
};

/// `[a, b]` or, with `with_support`, `[a, b] (2)`.
fn render_itemset(
    db: &TransactionDatabase,
    itemset: &[ItemId],
    count: SupportCount,
    with_support: bool,
) -> String {
    let items = db.resolve(itemset).join(", ");
    if with_support {
        format!("[{}] ({})", items, count)
    } else {
        format!("[{}]", items)
    }
}

pub fn render_level(
    db: &TransactionDatabase,
    itemsets: &ItemsetCounts,
    with_support: bool,
) -> String {
    let rendered = itemsets
        .iter()
        .map(|(itemset, &count)| render_itemset(db, itemset, count, with_support))
        .join(", ");
    format!("[{}]", rendered)
}

/// One `Size {k}: {itemsets}` line per level, in increasing `k`.
pub fn render(
    db: &TransactionDatabase,
    frequent_itemsets: &FrequentItemsets,
    with_support: bool,
) -> Vec<String> {
    frequent_itemsets
        .iter()
        .map(|(size, itemsets)| {
            format!("Size {}: {}", size, render_level(db, itemsets, with_support))
        })
        .collect()
}

pub fn write_report<W: Write>(
    mut out: W,
    db: &TransactionDatabase,
    frequent_itemsets: &FrequentItemsets,
    with_support: bool,
) -> io::Result<()> {
    for line in render(db, frequent_itemsets, with_support) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
