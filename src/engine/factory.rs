// ============================================================================
// Wallet Service Factory
// Creates wallet services with proper configuration
// ============================================================================

use crate::domain::{Asset, SettlementPolicy, WalletConfig, WalletError, WalletResult};
use crate::engine::{ExactSettlement, LegacySettlement, WalletService};
use crate::interfaces::{
    EventHandler, InMemoryOwnerRegistry, OwnerRegistry, PriceOracle, SettlementStrategy,
};
use crate::numeric::Balance;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a wallet service from configuration
///
/// # Arguments
/// * `config` - Wallet configuration
/// * `registry` - One-wallet-per-owner ledger
/// * `oracle` - Exchange rate source
/// * `event_handler` - Event handler for wallet events
///
/// # Example
/// ```
/// use wallet_engine::prelude::*;
/// use std::sync::Arc;
///
/// let service = create_from_config(
///     WalletConfig::standard(),
///     Arc::new(InMemoryOwnerRegistry::new()),
///     Arc::new(InMemoryPriceOracle::new()),
///     Arc::new(NoOpEventHandler),
/// )
/// .unwrap();
/// assert_eq!(service.strategy_name(), "Exact");
/// ```
pub fn create_from_config(
    config: WalletConfig,
    registry: Arc<dyn OwnerRegistry>,
    oracle: Arc<dyn PriceOracle>,
    event_handler: Arc<dyn EventHandler>,
) -> WalletResult<WalletService> {
    config.validate().map_err(WalletError::InvalidConfig)?;

    Ok(WalletService::new(config, registry, oracle, event_handler))
}

/// Creates the settlement strategy for a policy
pub(crate) fn create_settlement_strategy(
    policy: SettlementPolicy,
) -> Box<dyn SettlementStrategy> {
    match policy {
        SettlementPolicy::Exact => Box::new(ExactSettlement::new()),
        SettlementPolicy::RetainDebitPrecision => Box::new(LegacySettlement::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating wallet services with fluent API
///
/// # Example
/// ```
/// use wallet_engine::prelude::*;
/// use wallet_engine::numeric::FixedPointDecimal;
/// use std::sync::Arc;
///
/// let oracle = Arc::new(InMemoryPriceOracle::new());
/// oracle.publish("primary_coin/asset_b", 500_000, 6);
///
/// let service = WalletServiceBuilder::new()
///     .with_initial_balance(FixedPointDecimal::new(1_000_000, 4))
///     .exact_settlement()
///     .with_oracle(oracle)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
pub struct WalletServiceBuilder {
    config: WalletConfig,
    registry: Option<Arc<dyn OwnerRegistry>>,
    oracle: Option<Arc<dyn PriceOracle>>,
}

impl WalletServiceBuilder {
    /// Create a new builder starting from the standard configuration
    pub fn new() -> Self {
        Self::from_config(WalletConfig::standard())
    }

    pub fn from_config(config: WalletConfig) -> Self {
        Self {
            config,
            registry: None,
            oracle: None,
        }
    }

    // ========================================================================
    // Issuance Configuration
    // ========================================================================

    /// Set the balance new wallets start with
    pub fn with_initial_balance(mut self, balance: Balance) -> Self {
        self.config.initial_balance = balance;
        self
    }

    /// Replace the set of swappable slots
    pub fn with_swappable_assets(mut self, assets: impl IntoIterator<Item = Asset>) -> Self {
        self.config = self.config.with_swappable_assets(assets);
        self
    }

    // ========================================================================
    // Settlement Configuration
    // ========================================================================

    /// Settle with true products truncated to the credited precision (default)
    pub fn exact_settlement(mut self) -> Self {
        self.config.settlement_policy = SettlementPolicy::Exact;
        self
    }

    /// Settle with products read at the debited precision
    pub fn legacy_settlement(mut self) -> Self {
        self.config.settlement_policy = SettlementPolicy::RetainDebitPrecision;
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Use an external registry (defaults to an in-memory one)
    pub fn with_registry(mut self, registry: Arc<dyn OwnerRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn PriceOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Build the wallet service
    ///
    /// # Errors
    /// `InvalidConfig` if no oracle was supplied or the configuration is invalid
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> WalletResult<WalletService> {
        let oracle = self
            .oracle
            .ok_or_else(|| WalletError::InvalidConfig("An oracle is required".to_string()))?;
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(InMemoryOwnerRegistry::new()));

        create_from_config(self.config, registry, oracle, event_handler)
    }
}

impl Default for WalletServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
