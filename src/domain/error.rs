// ============================================================================
// Wallet Errors
// Caller-visible failures of the wallet service
// ============================================================================

use super::{Asset, OwnerId, WalletId};
use crate::numeric::{FixedPointDecimal, NumericError};
use thiserror::Error;

/// Errors returned by wallet issuance, swaps and queries.
///
/// Every error is synchronous and leaves wallet state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("owner {0} has already been issued a wallet")]
    AlreadyRegistered(OwnerId),

    #[error("insufficient {asset}: requested {requested}, available {available}")]
    InsufficientAmount {
        asset: Asset,
        requested: FixedPointDecimal,
        available: FixedPointDecimal,
    },

    #[error("swapping {debited} of {asset} yields no proceeds at this rate")]
    ZeroProceeds {
        asset: Asset,
        debited: FixedPointDecimal,
    },

    #[error("no rate published for pair {0}")]
    RateUnavailable(String),

    #[error("precision mismatch: {left} places vs {right} places")]
    PrecisionMismatch { left: u8, right: u8 },

    #[error("unknown asset identifier: {0:?}")]
    UnknownAsset(String),

    #[error("asset {0} is not swappable")]
    AssetNotSwappable(Asset),

    #[error("cannot swap {0} into itself")]
    SameAsset(Asset),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("arithmetic underflow")]
    Underflow,

    #[error("wallet {0} not found")]
    WalletNotFound(WalletId),

    #[error("caller {0} is not authorized for this operation")]
    Unauthorized(OwnerId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Numeric(NumericError),
}

impl From<NumericError> for WalletError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::Overflow => WalletError::Overflow,
            NumericError::Underflow => WalletError::Underflow,
            NumericError::PrecisionMismatch { left, right } => {
                WalletError::PrecisionMismatch { left, right }
            },
            other => WalletError::Numeric(other),
        }
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_error_mapping() {
        assert_eq!(WalletError::from(NumericError::Overflow), WalletError::Overflow);
        assert_eq!(WalletError::from(NumericError::Underflow), WalletError::Underflow);
        assert_eq!(
            WalletError::from(NumericError::PrecisionMismatch { left: 4, right: 6 }),
            WalletError::PrecisionMismatch { left: 4, right: 6 }
        );
        assert_eq!(
            WalletError::from(NumericError::InvalidInput),
            WalletError::Numeric(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_zero_proceeds_display() {
        let err = WalletError::ZeroProceeds {
            asset: Asset::PrimaryCoin,
            debited: FixedPointDecimal::new(1, 4),
        };
        assert_eq!(
            err.to_string(),
            "swapping 0.0001 of primary_coin yields no proceeds at this rate"
        );
    }

    #[test]
    fn test_error_display() {
        let err = WalletError::InsufficientAmount {
            asset: Asset::PrimaryCoin,
            requested: FixedPointDecimal::new(2_000_000, 4),
            available: FixedPointDecimal::new(1_000_000, 4),
        };
        assert_eq!(
            err.to_string(),
            "insufficient primary_coin: requested 200.0000, available 100.0000"
        );
        assert_eq!(
            WalletError::RateUnavailable("primary_coin/asset_b".to_string()).to_string(),
            "no rate published for pair primary_coin/asset_b"
        );
    }
}
