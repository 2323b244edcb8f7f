// ============================================================================
// Wallet Engine Library
// Multi-asset wallets with fixed-point balances and oracle-priced swaps
// ============================================================================

//! # Wallet Engine
//!
//! A wallet ledger where each owner holds one wallet with five asset
//! balances, and can swap between tracked assets at a rate supplied by an
//! external price oracle.
//!
//! ## Features
//!
//! - **Fixed-point arithmetic** with explicit precision: mismatched decimal
//!   places are an error, never a silent miscalculation
//! - **Rate normalization** from the oracle's precision to the debited
//!   asset's precision
//! - **Pluggable settlement strategies** (exact or legacy proceeds)
//! - **One wallet per owner**, enforced by an atomic registry claim
//! - **All-or-nothing swaps** under a per-wallet lock
//! - **Event stream** for audit trail
//!
//! ## Example
//!
//! ```rust
//! use wallet_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let oracle = Arc::new(InMemoryPriceOracle::new());
//! oracle.publish("primary_coin/asset_b", 500_000, 6); // 0.500000
//!
//! let service = WalletServiceBuilder::new()
//!     .with_oracle(oracle)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let ctx = RequestContext::user("alice");
//! let wallet_id = service.issue_wallet(&ctx).unwrap();
//!
//! // Swap 0.1000 primary_coin into asset_b
//! service.swap(&ctx, wallet_id, "primary_coin", "asset_b", 1_000).unwrap();
//!
//! let wallet = service.wallet(wallet_id).unwrap();
//! assert_eq!(wallet.primary_coin().to_string(), "99.9000");
//! assert_eq!(wallet.asset_b().to_string(), "100.0500");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Asset, OwnerId, RequestContext, Role, Settlement, SettlementPolicy, SettlementRequest,
        Wallet, WalletConfig, WalletError, WalletId, WalletResult,
    };
    pub use crate::engine::{
        create_from_config, normalize_rate, ExactSettlement, LegacySettlement, WalletService,
        WalletServiceBuilder,
    };
    pub use crate::interfaces::{
        ChannelEventHandler, EventHandler, FixedRateOracle, InMemoryOwnerRegistry,
        InMemoryPriceOracle, LoggingEventHandler, NoOpEventHandler, OwnerRegistry, PriceOracle,
        SettlementStrategy, WalletEvent,
    };
    pub use crate::numeric::{Balance, ExchangeRate, FixedPointDecimal, NumericError};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn service(policy: SettlementPolicy) -> WalletService {
        let oracle = Arc::new(InMemoryPriceOracle::new());
        oracle.publish("primary_coin/asset_b", 500_000, 6);

        WalletServiceBuilder::from_config(
            WalletConfig::standard().with_settlement_policy(policy),
        )
        .with_oracle(oracle)
        .build(Arc::new(NoOpEventHandler))
        .unwrap()
    }

    #[test]
    fn test_half_rate_swap_exact() {
        let service = service(SettlementPolicy::Exact);
        let ctx = RequestContext::user("alice");
        let wallet_id = service.issue_wallet(&ctx).unwrap();

        let settlement = service
            .swap(&ctx, wallet_id, "primary_coin", "asset_b", 1_000)
            .unwrap();

        assert_eq!(settlement.normalized_rate, FixedPointDecimal::new(5_000, 4));
        assert_eq!(settlement.normalized_rate.to_string(), "0.5000");
        assert_eq!(settlement.credited.to_string(), "0.0500");

        let wallet = service.wallet(wallet_id).unwrap();
        assert_eq!(wallet.primary_coin().to_string(), "99.9000");
        assert_eq!(wallet.asset_b().to_string(), "100.0500");
        assert_eq!(wallet.asset_c().to_string(), "100.0000");
    }

    #[test]
    fn test_half_rate_swap_legacy() {
        let service = service(SettlementPolicy::RetainDebitPrecision);
        let ctx = RequestContext::user("alice");
        let wallet_id = service.issue_wallet(&ctx).unwrap();

        let settlement = service
            .swap(&ctx, wallet_id, "primary_coin", "asset_b", 1_000)
            .unwrap();

        // 1000 * 5000 = 5_000_000 read at 4 places
        assert_eq!(settlement.credited, FixedPointDecimal::new(5_000_000, 4));

        let wallet = service.wallet(wallet_id).unwrap();
        assert_eq!(wallet.primary_coin().to_string(), "99.9000");
        assert_eq!(wallet.asset_b().to_string(), "600.0000");
    }

    #[test]
    fn test_failed_swap_changes_nothing() {
        let service = service(SettlementPolicy::Exact);
        let ctx = RequestContext::user("alice");
        let wallet_id = service.issue_wallet(&ctx).unwrap();
        let before = service.wallet(wallet_id).unwrap();

        for (from, to, amount) in [
            ("primary_coin", "asset_b", 1_000_001),
            ("asset_b", "primary_coin", 1),
            ("primary_coin", "asset_x", 1),
            ("asset_d", "asset_b", 1),
        ] {
            assert!(service.swap(&ctx, wallet_id, from, to, amount).is_err());
        }

        assert_eq!(service.wallet(wallet_id).unwrap(), before);
        assert_eq!(service.swap_count(), 0);
    }

    #[test]
    fn test_concurrent_registration() {
        let service = Arc::new(service(SettlementPolicy::Exact));
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let service = Arc::clone(&service);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    service.issue_wallet(&RequestContext::user("alice"))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(WalletError::AlreadyRegistered(_)))));
        assert_eq!(service.wallet_count(), 1);
    }
}
