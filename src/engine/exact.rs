// ============================================================================
// Exact Settlement
// Proceeds are the true product of amount and rate
// ============================================================================

use crate::interfaces::SettlementStrategy;
use crate::numeric::{ExchangeRate, FixedPointDecimal, NumericResult};

/// Multiplies at full precision (`p + p` places) and truncates the proceeds
/// to the credited asset's precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactSettlement;

impl ExactSettlement {
    pub fn new() -> Self {
        Self
    }
}

impl SettlementStrategy for ExactSettlement {
    fn proceeds(
        &self,
        debited: FixedPointDecimal,
        normalized_rate: ExchangeRate,
        credit_places: u8,
    ) -> NumericResult<FixedPointDecimal> {
        let proceeds = debited.checked_mul_rescaled(normalized_rate, credit_places)?;

        if let Ok(full) = debited.checked_mul(normalized_rate) {
            if proceeds.rescale(full.places()) != Ok(full) {
                tracing::debug!(product = %full, %proceeds, "Proceeds truncated");
            }
        }

        Ok(proceeds)
    }

    fn name(&self) -> &str {
        "Exact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, SettlementRequest, WalletError};
    use crate::engine::normalize_rate;
    use proptest::prelude::*;

    fn request(amount: u64, rate: FixedPointDecimal) -> SettlementRequest {
        SettlementRequest {
            from: Asset::PrimaryCoin,
            to: Asset::AssetB,
            from_balance: FixedPointDecimal::new(1_000_000, 4),
            to_balance: FixedPointDecimal::new(1_000_000, 4),
            rate,
            amount,
        }
    }

    #[test]
    fn test_exact_settlement() {
        let settlement = ExactSettlement
            .settle(&request(1_000, FixedPointDecimal::new(500_000, 6)))
            .unwrap();

        assert_eq!(settlement.normalized_rate, FixedPointDecimal::new(5_000, 4));
        assert_eq!(settlement.debited.to_string(), "0.1000");
        assert_eq!(settlement.credited.to_string(), "0.0500");
        assert_eq!(settlement.from_balance.to_string(), "99.9000");
        assert_eq!(settlement.to_balance.to_string(), "100.0500");
    }

    #[test]
    fn test_full_balance_swap() {
        let settlement = ExactSettlement
            .settle(&request(1_000_000, FixedPointDecimal::new(2, 0)))
            .unwrap();

        assert!(settlement.from_balance.is_zero());
        assert_eq!(settlement.to_balance.to_string(), "300.0000");
    }

    #[test]
    fn test_insufficient_amount() {
        let result = ExactSettlement.settle(&request(1_000_001, FixedPointDecimal::new(1, 0)));
        assert_eq!(
            result,
            Err(WalletError::InsufficientAmount {
                asset: Asset::PrimaryCoin,
                requested: FixedPointDecimal::new(1_000_001, 4),
                available: FixedPointDecimal::new(1_000_000, 4),
            })
        );
    }

    #[test]
    fn test_same_asset_rejected() {
        let mut req = request(1_000, FixedPointDecimal::new(1, 0));
        req.to = Asset::PrimaryCoin;
        assert_eq!(
            ExactSettlement.settle(&req),
            Err(WalletError::SameAsset(Asset::PrimaryCoin))
        );
    }

    #[test]
    fn test_credit_overflow() {
        let mut req = request(1_000, FixedPointDecimal::new(1, 0));
        req.to_balance = FixedPointDecimal::new(u64::MAX, 4);
        assert_eq!(ExactSettlement.settle(&req), Err(WalletError::Overflow));
    }

    #[test]
    fn test_dust_swap_rejected() {
        // 0.0001 * 0.5000 = 0.00005, nothing survives at 4 places
        let result = ExactSettlement.settle(&request(1, FixedPointDecimal::new(500_000, 6)));
        assert_eq!(
            result,
            Err(WalletError::ZeroProceeds {
                asset: Asset::PrimaryCoin,
                debited: FixedPointDecimal::new(1, 4),
            })
        );

        // Smallest amount that credits something at this rate
        let settlement = ExactSettlement
            .settle(&request(2, FixedPointDecimal::new(500_000, 6)))
            .unwrap();
        assert_eq!(settlement.credited, FixedPointDecimal::new(1, 4));
    }

    #[test]
    fn test_zero_amount_settles() {
        let settlement = ExactSettlement
            .settle(&request(0, FixedPointDecimal::new(500_000, 6)))
            .unwrap();
        assert!(settlement.credited.is_zero());
        assert_eq!(settlement.to_balance, FixedPointDecimal::new(1_000_000, 4));
    }

    proptest! {
        #[test]
        fn prop_settle_debits_amount_and_credits_exact_product(
            amount in 0u64..=1_000_000,
            rate_value in 0u64..=10_000_000,
            rate_places in 0u8..=8,
        ) {
            let rate = FixedPointDecimal::new(rate_value, rate_places);
            let balance = FixedPointDecimal::new(1_000_000, 4);
            let debited = FixedPointDecimal::new(amount, 4);
            let normalized = normalize_rate(rate, 4).unwrap();
            let expected = debited.checked_mul_rescaled(normalized, 4).unwrap();

            match ExactSettlement.settle(&request(amount, rate)) {
                Ok(settlement) => {
                    prop_assert_eq!(settlement.debited, debited);
                    prop_assert_eq!(settlement.credited, expected);
                    prop_assert_eq!(settlement.normalized_rate, normalized);
                    prop_assert_eq!(
                        settlement.from_balance,
                        balance.checked_sub(debited).unwrap()
                    );
                    prop_assert_eq!(
                        settlement.to_balance,
                        balance.checked_add(expected).unwrap()
                    );
                }
                Err(err) => {
                    prop_assert!(amount > 0 && expected.is_zero());
                    prop_assert_eq!(
                        err,
                        WalletError::ZeroProceeds { asset: Asset::PrimaryCoin, debited }
                    );
                }
            }
        }

        #[test]
        fn prop_settle_rejects_amount_above_balance(
            excess in 1u64..=1_000_000_000,
            rate_value in 0u64..=10_000_000,
            rate_places in 0u8..=8,
        ) {
            let req = request(1_000_000 + excess, FixedPointDecimal::new(rate_value, rate_places));
            let is_insufficient = matches!(
                ExactSettlement.settle(&req),
                Err(WalletError::InsufficientAmount { .. })
            );
            prop_assert!(is_insufficient);
        }
    }
}
