use std::path::{Path, PathBuf};

use crate::error::{AprioriError, Result};
use crate::types::ItemsetLength;

const PARTS_PER_MILLION: u128 = 1_000_000;

/// Minimum support, either as a transaction count or as a share of the
/// database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Ratio(f32),
}

impl MinSupport {
    pub fn count(count: i64) -> Result<Self> {
        if count < 0 {
            return Err(AprioriError::InvalidConfiguration(format!(
                "min support must not be negative, got {}",
                count
            )));
        }
        Ok(MinSupport::Count(count as usize))
    }

    pub fn ratio(ratio: f32) -> Result<Self> {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(AprioriError::InvalidConfiguration(format!(
                "min support ratio must lie in [0, 1], got {}",
                ratio
            )));
        }
        Ok(MinSupport::Ratio(ratio))
    }

    /// Threshold in transactions for a database of `num_transactions`.
    ///
    /// Ratios are resolved at a resolution of one part per million, in integer
    /// arithmetic, so `0.6` of 25 transactions is exactly 15.
    pub fn to_count(self, num_transactions: usize) -> usize {
        match self {
            MinSupport::Count(count) => count,
            MinSupport::Ratio(ratio) => {
                let parts = (f64::from(ratio) * PARTS_PER_MILLION as f64).round() as u128;
                let count = (parts * num_transactions as u128 + PARTS_PER_MILLION - 1)
                    / PARTS_PER_MILLION;
                count as usize
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// Union of every pair of frequent itemsets.
    Pairwise,
    /// Join on a shared prefix, then prune by infrequent subsets.
    PrefixJoin,
}

impl Default for CandidateStrategy {
    fn default() -> Self {
        CandidateStrategy::Pairwise
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingStrategy {
    /// Membership test against every transaction.
    Scan,
    /// Intersection of per-item transaction bitsets.
    Tidset,
}

impl Default for CountingStrategy {
    fn default() -> Self {
        CountingStrategy::Scan
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiningConfig {
    min_support: MinSupport,
    max_len: Option<ItemsetLength>,
    candidates: CandidateStrategy,
    counting: CountingStrategy,
    parallel: bool,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            max_len: None,
            candidates: CandidateStrategy::default(),
            counting: CountingStrategy::default(),
            parallel: false,
        }
    }

    pub fn with_min_support_count(count: i64) -> Result<Self> {
        Ok(Self::new(MinSupport::count(count)?))
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Result<Self> {
        if max_len == 0 {
            return Err(AprioriError::InvalidConfiguration(
                "max itemset length must be at least 1".to_string(),
            ));
        }
        self.max_len = Some(max_len);
        Ok(self)
    }

    pub fn with_candidates(mut self, candidates: CandidateStrategy) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_counting(mut self, counting: CountingStrategy) -> Self {
        self.counting = counting;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_support(&self) -> MinSupport {
        self.min_support
    }

    pub fn max_len(&self) -> Option<ItemsetLength> {
        self.max_len
    }

    pub fn candidates(&self) -> CandidateStrategy {
        self.candidates
    }

    pub fn counting(&self) -> CountingStrategy {
        self.counting
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    input_path: PathBuf,
    delimiter: u8,
    mining: MiningConfig,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>, mining: MiningConfig) -> Result<Self> {
        let input_path = input_path.into();
        if input_path.as_os_str().is_empty() {
            return Err(AprioriError::InvalidConfiguration(
                "input path must not be empty".to_string(),
            ));
        }
        Ok(Self {
            input_path,
            delimiter: b',',
            mining,
        })
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(AprioriError::InvalidConfiguration(format!(
                "delimiter must be a single ASCII character, got {:?}",
                delimiter
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn mining(&self) -> &MiningConfig {
        &self.mining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_count() {
        assert!(matches!(
            MinSupport::count(-1),
            Err(AprioriError::InvalidConfiguration(_))
        ));
        assert_eq!(MinSupport::count(0).unwrap(), MinSupport::Count(0));
    }

    #[test]
    fn rejects_ratio_out_of_range() {
        assert!(MinSupport::ratio(1.5).is_err());
        assert!(MinSupport::ratio(-0.1).is_err());
        assert!(MinSupport::ratio(f32::NAN).is_err());
        assert!(MinSupport::ratio(1.0).is_ok());
    }

    #[test]
    fn ratio_rounds_up() {
        assert_eq!(MinSupport::Ratio(0.5).to_count(4), 2);
        assert_eq!(MinSupport::Ratio(0.5).to_count(5), 3);
        assert_eq!(MinSupport::Ratio(0.01).to_count(4), 1);
        assert_eq!(MinSupport::Ratio(0.5).to_count(0), 0);
        assert_eq!(MinSupport::Count(7).to_count(0), 7);
    }

    #[test]
    fn ratio_resolves_without_float_error() {
        assert_eq!(MinSupport::Ratio(0.6).to_count(25), 15);
        assert_eq!(MinSupport::Ratio(0.3).to_count(50), 15);
        assert_eq!(MinSupport::Ratio(0.6).to_count(50), 30);
        assert_eq!(MinSupport::Ratio(1.0).to_count(7), 7);
    }

    #[test]
    fn ratio_matches_exact_percentages() {
        for pct in 1..=100usize {
            for n in 1..=100usize {
                let expected = (pct * n + 99) / 100;
                let ratio = MinSupport::Ratio(pct as f32 / 100.0);
                assert_eq!(ratio.to_count(n), expected, "{}% of {}", pct, n);
            }
        }
    }

    #[test]
    fn rejects_zero_max_len() {
        let config = MiningConfig::with_min_support_count(2).unwrap();

        assert!(config.clone().with_max_len(0).is_err());
        assert_eq!(config.with_max_len(3).unwrap().max_len(), Some(3));
    }

    #[test]
    fn rejects_empty_input_path() {
        let mining = MiningConfig::with_min_support_count(2).unwrap();

        assert!(matches!(
            RunConfig::new("", mining.clone()),
            Err(AprioriError::InvalidConfiguration(_))
        ));
        assert!(RunConfig::new("transactions.csv", mining).is_ok());
    }

    #[test]
    fn delimiter_must_be_ascii() {
        let mining = MiningConfig::with_min_support_count(2).unwrap();
        let config = RunConfig::new("transactions.csv", mining).unwrap();

        assert_eq!(config.delimiter(), b',');
        assert!(config.clone().with_delimiter('é').is_err());
        assert_eq!(config.with_delimiter(';').unwrap().delimiter(), b';');
    }

    #[test]
    fn defaults_are_sequential_pairwise_scan() {
        let config = MiningConfig::with_min_support_count(2).unwrap();

        assert_eq!(config.candidates(), CandidateStrategy::Pairwise);
        assert_eq!(config.counting(), CountingStrategy::Scan);
        assert!(!config.parallel());
        assert_eq!(config.max_len(), None);
    }
}
