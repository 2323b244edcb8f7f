// ============================================================================
// Price Oracle Interface
// Source of exchange rates keyed by asset pair
// ============================================================================

use crate::numeric::{ExchangeRate, FixedPointDecimal};
use parking_lot::RwLock;
use std::collections::HashMap;

/// External price feed.
///
/// Returns `None` when nothing has been published for the pair; callers must
/// treat that as a failure and never substitute a default rate.
pub trait PriceOracle: Send + Sync {
    /// Latest rate for `pair_key` (e.g. `"primary_coin/asset_b"`), at the
    /// precision it was published with
    fn latest_rate(&self, pair_key: &str) -> Option<ExchangeRate>;
}

/// Oracle backed by an in-process table of published rates
#[derive(Debug, Default)]
pub struct InMemoryPriceOracle {
    rates: RwLock<HashMap<String, ExchangeRate>>,
}

impl InMemoryPriceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish (or overwrite) the rate for a pair as `(value, decimals)`
    pub fn publish(&self, pair_key: impl Into<String>, value: u64, decimals: u8) {
        let pair_key = pair_key.into();
        tracing::debug!(pair = %pair_key, value, decimals, "Rate published");
        self.rates
            .write()
            .insert(pair_key, FixedPointDecimal::new(value, decimals));
    }

    /// Withdraw the rate for a pair
    pub fn retract(&self, pair_key: &str) -> Option<ExchangeRate> {
        self.rates.write().remove(pair_key)
    }
}

impl PriceOracle for InMemoryPriceOracle {
    fn latest_rate(&self, pair_key: &str) -> Option<ExchangeRate> {
        self.rates.read().get(pair_key).copied()
    }
}

/// Oracle that quotes the same rate for every pair (test harnesses)
#[derive(Debug, Clone, Copy)]
pub struct FixedRateOracle(pub ExchangeRate);

impl PriceOracle for FixedRateOracle {
    fn latest_rate(&self, _pair_key: &str) -> Option<ExchangeRate> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_oracle() {
        let oracle = InMemoryPriceOracle::new();
        assert_eq!(oracle.latest_rate("primary_coin/asset_b"), None);

        oracle.publish("primary_coin/asset_b", 500_000, 6);
        assert_eq!(
            oracle.latest_rate("primary_coin/asset_b"),
            Some(FixedPointDecimal::new(500_000, 6))
        );
        // Pairs are directional
        assert_eq!(oracle.latest_rate("asset_b/primary_coin"), None);

        oracle.publish("primary_coin/asset_b", 2_000_000, 6);
        assert_eq!(
            oracle.latest_rate("primary_coin/asset_b"),
            Some(FixedPointDecimal::new(2_000_000, 6))
        );

        assert!(oracle.retract("primary_coin/asset_b").is_some());
        assert_eq!(oracle.latest_rate("primary_coin/asset_b"), None);
    }

    #[test]
    fn test_fixed_rate_oracle() {
        let oracle = FixedRateOracle(FixedPointDecimal::new(5, 1));
        assert_eq!(oracle.latest_rate("anything"), Some(FixedPointDecimal::new(5, 1)));
    }
}
