//! Frequent itemset mining with the level-wise Apriori search.
//!
//! Transactions are loaded into a [`TransactionDatabase`], mined with
//! [`generate_frequent_itemsets`] and rendered with [`report::render`].
//!
//! ```
//! use apriori::{generate_frequent_itemsets, MiningConfig, TransactionDatabase};
//!
//! let db = TransactionDatabase::from_raw(vec![
//!     vec!["A", "B"],
//!     vec!["A", "C"],
//!     vec!["A", "B", "C"],
//!     vec!["B", "C"],
//! ]);
//! let config = MiningConfig::with_min_support_count(2)?;
//! let frequent_itemsets = generate_frequent_itemsets(&db, &config);
//!
//! assert_eq!(frequent_itemsets[&1].len(), 3);
//! assert_eq!(frequent_itemsets[&2].len(), 3);
//! assert!(!frequent_itemsets.contains_key(&3));
//! # Ok::<(), apriori::AprioriError>(())
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod io;
pub mod itemsets;
pub mod report;
pub mod store;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::{CandidateStrategy, CountingStrategy, MinSupport, MiningConfig, RunConfig};
pub use error::{AprioriError, Result};
pub use io::load_transactions;
pub use itemsets::count::support;
pub use itemsets::search::generate_frequent_itemsets;
pub use store::TransactionDatabase;
