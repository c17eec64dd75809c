use std::collections::BTreeMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{
    config::MiningConfig,
    error::AprioriError,
    itemsets::search::generate_frequent_itemsets,
    store::TransactionDatabase,
    types::{FrequentItemsets, ItemName, ItemsetLength, SupportCount},
};

pub type PyFrequentItemsets = BTreeMap<ItemsetLength, Vec<(Vec<ItemName>, SupportCount)>>;

pub fn convert_frequent_itemsets(
    db: &TransactionDatabase,
    frequent_itemsets: &FrequentItemsets,
) -> PyFrequentItemsets {
    frequent_itemsets
        .iter()
        .map(|(&size, itemset_counts)| {
            let itemsets: Vec<(Vec<ItemName>, SupportCount)> = itemset_counts
                .iter()
                .map(|(itemset, &count)| {
                    let names: Vec<ItemName> = db.resolve(itemset).map(String::from).collect();
                    (names, count)
                })
                .collect();
            (size, itemsets)
        })
        .collect()
}

fn to_py_err(err: AprioriError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Frequent itemsets of `transactions` keyed by itemset length.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, max_len=None)")]
fn frequent_itemsets(
    transactions: Vec<Vec<String>>,
    min_support: i64,
    max_len: Option<ItemsetLength>,
) -> PyResult<PyFrequentItemsets> {
    let mut config = MiningConfig::with_min_support_count(min_support).map_err(to_py_err)?;
    if let Some(max_len) = max_len {
        config = config.with_max_len(max_len).map_err(to_py_err)?;
    }

    let db = TransactionDatabase::from_raw(transactions);
    let frequent = generate_frequent_itemsets(&db, &config);
    Ok(convert_frequent_itemsets(&db, &frequent))
}

#[pymodule]
pub fn apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}
