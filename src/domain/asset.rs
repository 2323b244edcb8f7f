// ============================================================================
// Asset Domain Model
// ============================================================================

use super::error::WalletError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five balance slots every wallet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Asset {
    /// Native coin of the host ledger
    PrimaryCoin,
    /// Emulated token B
    AssetB,
    /// Emulated token C
    AssetC,
    /// Emulated token D
    AssetD,
    /// Stable reference unit
    ReferenceUnit,
}

impl Asset {
    /// All assets in slot order.
    pub const ALL: [Asset; 5] = [
        Asset::PrimaryCoin,
        Asset::AssetB,
        Asset::AssetC,
        Asset::AssetD,
        Asset::ReferenceUnit,
    ];

    /// Wire identifier used by callers and oracle pair keys.
    pub const fn identifier(self) -> &'static str {
        match self {
            Asset::PrimaryCoin => "primary_coin",
            Asset::AssetB => "asset_b",
            Asset::AssetC => "asset_c",
            Asset::AssetD => "asset_d",
            Asset::ReferenceUnit => "reference_unit",
        }
    }

    /// Oracle key for the rate that converts `from` into `to`.
    pub fn pair_key(from: Asset, to: Asset) -> String {
        format!("{}/{}", from.identifier(), to.identifier())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.identifier())
    }
}

impl FromStr for Asset {
    type Err = WalletError;

    /// Exhaustive lookup; an unrecognized identifier never aliases another slot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Asset::ALL
            .into_iter()
            .find(|asset| asset.identifier() == s)
            .ok_or_else(|| WalletError::UnknownAsset(s.to_string()))
    }
}
