// ============================================================================
// Wallet Domain Model
// ============================================================================

use super::{Asset, Settlement};
use crate::numeric::Balance;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalletId(Uuid);

impl WalletId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WalletId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// External identity of a wallet holder (an account address or user id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Wallet Entity
// ============================================================================

/// One holder's balances across the five tracked assets.
///
/// Balances change only through [`Wallet::apply`], which writes the debit and
/// credit of a settlement together.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wallet {
    pub id: WalletId,
    pub owner: OwnerId,
    pub created_at: DateTime<Utc>,
    primary_coin: Balance,
    asset_b: Balance,
    asset_c: Balance,
    asset_d: Balance,
    reference_unit: Balance,
}

impl Wallet {
    /// Create a wallet with every slot set to `initial_balance`.
    pub fn new(owner: OwnerId, initial_balance: Balance) -> Self {
        Self {
            id: WalletId::new(),
            owner,
            created_at: Utc::now(),
            primary_coin: initial_balance,
            asset_b: initial_balance,
            asset_c: initial_balance,
            asset_d: initial_balance,
            reference_unit: initial_balance,
        }
    }

    pub fn balance(&self, asset: Asset) -> Balance {
        match asset {
            Asset::PrimaryCoin => self.primary_coin,
            Asset::AssetB => self.asset_b,
            Asset::AssetC => self.asset_c,
            Asset::AssetD => self.asset_d,
            Asset::ReferenceUnit => self.reference_unit,
        }
    }

    fn slot_mut(&mut self, asset: Asset) -> &mut Balance {
        match asset {
            Asset::PrimaryCoin => &mut self.primary_coin,
            Asset::AssetB => &mut self.asset_b,
            Asset::AssetC => &mut self.asset_c,
            Asset::AssetD => &mut self.asset_d,
            Asset::ReferenceUnit => &mut self.reference_unit,
        }
    }

    /// Write both legs of a computed settlement.
    pub(crate) fn apply(&mut self, settlement: &Settlement) {
        *self.slot_mut(settlement.from) = settlement.from_balance;
        *self.slot_mut(settlement.to) = settlement.to_balance;
    }

    // ========================================================================
    // Per-asset Getters
    // ========================================================================

    pub fn primary_coin(&self) -> Balance {
        self.primary_coin
    }

    pub fn asset_b(&self) -> Balance {
        self.asset_b
    }

    pub fn asset_c(&self) -> Balance {
        self.asset_c
    }

    pub fn asset_d(&self) -> Balance {
        self.asset_d
    }

    pub fn reference_unit(&self) -> Balance {
        self.reference_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FixedPointDecimal;

    #[test]
    fn test_wallet_creation() {
        let initial = FixedPointDecimal::new(1_000_000, 4);
        let wallet = Wallet::new(OwnerId::from("alice"), initial);

        assert_eq!(wallet.owner.as_str(), "alice");
        for asset in Asset::ALL {
            assert_eq!(wallet.balance(asset), initial);
        }
        assert_eq!(wallet.primary_coin().to_string(), "100.0000");
    }

    #[test]
    fn test_apply_settlement() {
        let initial = FixedPointDecimal::new(1_000_000, 4);
        let mut wallet = Wallet::new(OwnerId::from("alice"), initial);

        let settlement = Settlement {
            from: Asset::PrimaryCoin,
            to: Asset::AssetB,
            debited: FixedPointDecimal::new(1_000, 4),
            credited: FixedPointDecimal::new(500, 4),
            normalized_rate: FixedPointDecimal::new(5_000, 4),
            from_balance: FixedPointDecimal::new(999_000, 4),
            to_balance: FixedPointDecimal::new(1_000_500, 4),
        };
        wallet.apply(&settlement);

        assert_eq!(wallet.primary_coin(), FixedPointDecimal::new(999_000, 4));
        assert_eq!(wallet.asset_b(), FixedPointDecimal::new(1_000_500, 4));
        assert_eq!(wallet.asset_c(), initial);
    }

    #[test]
    fn test_wallet_ids_unique() {
        assert_ne!(WalletId::new(), WalletId::new());
    }
}
