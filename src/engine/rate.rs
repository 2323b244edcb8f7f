// ============================================================================
// Rate Normalization
// Brings an oracle rate to the precision of the asset being debited
// ============================================================================

use crate::numeric::{ExchangeRate, NumericResult};

/// Rescale `rate` to `target_places`.
///
/// - `target > rate.places()`: magnitude multiplied by `10^(target - places)`
/// - `target < rate.places()`: magnitude divided by `10^(places - target)`,
///   truncating; never fails
/// - equal: returned unchanged
///
/// # Errors
/// Returns `Overflow` if scaling up does not fit in a u64.
pub fn normalize_rate(rate: ExchangeRate, target_places: u8) -> NumericResult<ExchangeRate> {
    let normalized = rate.rescale(target_places)?;

    if target_places < rate.places() && normalized.rescale(rate.places()) != Ok(rate) {
        tracing::debug!(%rate, %normalized, "Rate truncated during normalization");
    }

    Ok(normalized)
}
