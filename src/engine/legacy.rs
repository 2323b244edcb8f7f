// ============================================================================
// Legacy Settlement
// Proceeds keep the debited asset's precision
// ============================================================================

use crate::interfaces::SettlementStrategy;
use crate::numeric::{ExchangeRate, FixedPointDecimal, NumericResult};

/// Reads the raw product `amount * rate` at the debited asset's precision.
///
/// This overstates proceeds by `10^places` relative to [`ExactSettlement`]
/// and exists only to reproduce balances settled under that rule. The
/// credited balance must share the debited precision, otherwise the credit
/// fails with `PrecisionMismatch`.
///
/// [`ExactSettlement`]: super::ExactSettlement
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacySettlement;

impl LegacySettlement {
    pub fn new() -> Self {
        Self
    }
}

impl SettlementStrategy for LegacySettlement {
    fn proceeds(
        &self,
        debited: FixedPointDecimal,
        normalized_rate: ExchangeRate,
        _credit_places: u8,
    ) -> NumericResult<FixedPointDecimal> {
        debited.checked_mul_retaining_places(normalized_rate)
    }

    fn name(&self) -> &str {
        "Legacy"
    }
}
