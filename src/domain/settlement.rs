// ============================================================================
// Settlement Domain Model
// ============================================================================

use super::Asset;
use crate::numeric::{Balance, ExchangeRate, FixedPointDecimal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs to a swap settlement, captured from one wallet under its lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementRequest {
    pub from: Asset,
    pub to: Asset,
    /// Current balance of the debited asset
    pub from_balance: Balance,
    /// Current balance of the credited asset
    pub to_balance: Balance,
    /// Rate as published by the oracle, at the oracle's precision
    pub rate: ExchangeRate,
    /// Raw magnitude to debit, read at the debited asset's precision
    pub amount: u64,
}

/// Outcome of a swap: both new balances plus the figures that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settlement {
    pub from: Asset,
    pub to: Asset,
    /// Amount removed from `from`
    pub debited: FixedPointDecimal,
    /// Proceeds added to `to`
    pub credited: FixedPointDecimal,
    /// Rate after normalization to the debited asset's precision
    pub normalized_rate: ExchangeRate,
    pub from_balance: Balance,
    pub to_balance: Balance,
}
