// ============================================================================
// Wallet Configuration
// Issuance defaults, swappable slots and settlement behavior
// ============================================================================

use super::Asset;
use crate::numeric::{Balance, FixedPointDecimal};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Settlement Policy
// ============================================================================

/// How swap proceeds are computed from the debited amount and the rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SettlementPolicy {
    /// True product `amount * rate` (places add up), truncated to the
    /// credited asset's precision
    /// - 0.1000 at rate 0.5000 credits 0.0500
    Exact,

    /// Product magnitude read at the debited asset's precision
    /// - 0.1000 at rate 0.5000 credits 500.0000
    /// - Reproduces ledgers that settled with this rule
    RetainDebitPrecision,
}

// ============================================================================
// Complete Wallet Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalletConfig {
    /// Balance every slot of a freshly issued wallet starts with
    pub initial_balance: Balance,

    /// Slots that may take part in a swap (either side)
    pub swappable_assets: HashSet<Asset>,

    /// Proceeds computation
    pub settlement_policy: SettlementPolicy,
}

impl WalletConfig {
    /// 100.0000 units of each asset
    pub const DEFAULT_INITIAL_BALANCE: Balance = FixedPointDecimal::new(1_000_000, 4);

    pub fn new(
        initial_balance: Balance,
        swappable_assets: HashSet<Asset>,
        settlement_policy: SettlementPolicy,
    ) -> Self {
        Self {
            initial_balance,
            swappable_assets,
            settlement_policy,
        }
    }

    /// Builder method: Set the balance new wallets start with
    pub fn with_initial_balance(mut self, initial_balance: Balance) -> Self {
        self.initial_balance = initial_balance;
        self
    }

    /// Builder method: Replace the set of swappable slots
    pub fn with_swappable_assets(mut self, assets: impl IntoIterator<Item = Asset>) -> Self {
        self.swappable_assets = assets.into_iter().collect();
        self
    }

    /// Builder method: Choose how proceeds are computed
    pub fn with_settlement_policy(mut self, policy: SettlementPolicy) -> Self {
        self.settlement_policy = policy;
        self
    }

    pub fn is_swappable(&self, asset: Asset) -> bool {
        self.swappable_assets.contains(&asset)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.swappable_assets.len() < 2 {
            return Err("At least two swappable assets are required".to_string());
        }

        if self.initial_balance.places() > FixedPointDecimal::MAX_PLACES {
            return Err(format!(
                "Initial balance precision cannot exceed {} places",
                FixedPointDecimal::MAX_PLACES
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl WalletConfig {
    /// Standard configuration
    /// - 100.0000 of each asset
    /// - primary_coin and asset_b swappable
    /// - Exact settlement
    pub fn standard() -> Self {
        Self::new(
            Self::DEFAULT_INITIAL_BALANCE,
            [Asset::PrimaryCoin, Asset::AssetB].into_iter().collect(),
            SettlementPolicy::Exact,
        )
    }

    /// Same as `standard` but proceeds keep the debited asset's precision
    pub fn legacy_compatible() -> Self {
        Self::standard().with_settlement_policy(SettlementPolicy::RetainDebitPrecision)
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = WalletConfig::standard();
        assert_eq!(config.initial_balance.to_string(), "100.0000");
        assert!(config.is_swappable(Asset::PrimaryCoin));
        assert!(config.is_swappable(Asset::AssetB));
        assert!(!config.is_swappable(Asset::ReferenceUnit));
        assert_eq!(config.settlement_policy, SettlementPolicy::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = WalletConfig::legacy_compatible()
            .with_initial_balance(FixedPointDecimal::new(5_000, 2))
            .with_swappable_assets(Asset::ALL);

        assert_eq!(config.settlement_policy, SettlementPolicy::RetainDebitPrecision);
        assert_eq!(config.initial_balance.to_string(), "50.00");
        assert_eq!(config.swappable_assets.len(), 5);
    }

    #[test]
    fn test_validation() {
        let single = WalletConfig::standard().with_swappable_assets([Asset::AssetB]);
        assert!(single.validate().is_err());

        let too_precise =
            WalletConfig::standard().with_initial_balance(FixedPointDecimal::new(1, 20));
        assert!(too_precise.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "initial_balance": { "value": 1000000, "places": 4 },
            "swappable_assets": ["PrimaryCoin", "AssetC"],
            "settlement_policy": "Exact"
        }"#;
        let config = WalletConfig::from_json(json).unwrap();
        assert!(config.is_swappable(Asset::AssetC));
        assert!(!config.is_swappable(Asset::AssetB));

        assert!(WalletConfig::from_json("{}").is_err());
    }
}
