use std::collections::{BTreeSet, HashMap};

use crate::types::{ItemId, ItemName, RawTransaction, Transaction};

/// In-memory transaction database.
///
/// Item tokens are interned to dense ids in lexicographic order of the
/// tokens, so sorting an itemset by id sorts it by name as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDatabase {
    transactions: Vec<Transaction>,
    inventory: Vec<ItemName>,
}

impl TransactionDatabase {
    pub fn from_raw<T, I, S>(raw_transactions: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<ItemName>,
    {
        let raw: Vec<RawTransaction> = raw_transactions
            .into_iter()
            .map(|items| items.into_iter().map(Into::into).collect())
            .collect();

        let inventory: Vec<ItemName> = raw
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let reverse_lookup: HashMap<&str, ItemId> = inventory
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
            .collect();

        let transactions = raw
            .iter()
            .map(|raw_transaction| {
                let mut items: Transaction = raw_transaction
                    .iter()
                    .map(|item| reverse_lookup[item.as_str()])
                    .collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        Self {
            transactions,
            inventory,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Every distinct item id, ascending.
    pub fn items(&self) -> impl Iterator<Item = ItemId> {
        0..self.inventory.len()
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.inventory.get(id).map(String::as_str)
    }

    pub fn lookup(&self, name: &str) -> Option<ItemId> {
        self.inventory
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .ok()
    }

    /// Item tokens of a canonical itemset, in canonical order.
    pub fn resolve<'a>(&'a self, itemset: &'a [ItemId]) -> impl Iterator<Item = &'a str> + 'a {
        itemset.iter().filter_map(move |&id| self.name(id))
    }
}
