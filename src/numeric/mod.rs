// ============================================================================
// Numeric Module
// Fixed-point arithmetic for monetary amounts and exchange rates
// ============================================================================
//
// This module provides:
// - FixedPointDecimal: unsigned magnitude with a runtime decimal place count
// - NumericError: Error types for arithmetic operations
// - Balance/ExchangeRate type aliases for the wallet domain
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no wrapping)
// - Operands must agree on precision; rescaling is always explicit
// - Down-scaling truncates, up-scaling fails on overflow

mod errors;
mod fixed_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{Balance, ExchangeRate, FixedPointDecimal};
