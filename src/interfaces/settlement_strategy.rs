// ============================================================================
// Settlement Strategy Interface
// Defines the contract for pluggable swap proceeds computation
// ============================================================================

use crate::domain::{Settlement, SettlementRequest, WalletError, WalletResult};
use crate::engine::normalize_rate;
use crate::numeric::{ExchangeRate, FixedPointDecimal, NumericResult};

/// Strategy pattern interface for swap settlement
/// Implementations: ExactSettlement, LegacySettlement
pub trait SettlementStrategy: Send + Sync {
    /// Compute the amount credited for `debited` at `normalized_rate`.
    ///
    /// # Arguments
    /// * `debited` - Amount removed from the source asset, at its precision
    /// * `normalized_rate` - Rate already rescaled to the source precision
    /// * `credit_places` - Precision of the credited balance
    fn proceeds(
        &self,
        debited: FixedPointDecimal,
        normalized_rate: ExchangeRate,
        credit_places: u8,
    ) -> NumericResult<FixedPointDecimal>;

    /// Get the strategy name for logging
    fn name(&self) -> &str;

    /// Compute both new balances for a swap.
    ///
    /// Pure: nothing is written, so a failure at any step leaves the wallet
    /// exactly as it was.
    ///
    /// # Errors
    /// - `SameAsset` if source and destination coincide
    /// - `InsufficientAmount` if `amount` exceeds the source balance
    /// - `ZeroProceeds` if a nonzero debit would credit nothing
    /// - `Overflow`/`PrecisionMismatch` from the arithmetic
    fn settle(&self, request: &SettlementRequest) -> WalletResult<Settlement> {
        if request.from == request.to {
            return Err(WalletError::SameAsset(request.from));
        }

        let places = request.from_balance.places();
        let debited = FixedPointDecimal::new(request.amount, places);

        if request.amount > request.from_balance.value() {
            return Err(WalletError::InsufficientAmount {
                asset: request.from,
                requested: debited,
                available: request.from_balance,
            });
        }

        let normalized_rate = normalize_rate(request.rate, places)?;
        let from_balance = request.from_balance.checked_sub(debited)?;
        let credited = self.proceeds(debited, normalized_rate, request.to_balance.places())?;
        if credited.is_zero() && !debited.is_zero() {
            return Err(WalletError::ZeroProceeds {
                asset: request.from,
                debited,
            });
        }
        let to_balance = request.to_balance.checked_add(credited)?;

        tracing::debug!(
            strategy = self.name(),
            from = %request.from,
            to = %request.to,
            %debited,
            %credited,
            %normalized_rate,
            "Settlement computed"
        );

        Ok(Settlement {
            from: request.from,
            to: request.to,
            debited,
            credited,
            normalized_rate,
            from_balance,
            to_balance,
        })
    }
}
