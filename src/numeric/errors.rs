// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded u64::MAX (or the place count exceeded u8::MAX)
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result would be negative
    #[error("arithmetic underflow: result below zero")]
    Underflow,
    /// Operands carry different decimal place counts
    #[error("precision mismatch: left operand has {left} places, right operand has {right}")]
    PrecisionMismatch { left: u8, right: u8 },
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            NumericError::PrecisionMismatch { left: 4, right: 6 }.to_string(),
            "precision mismatch: left operand has 4 places, right operand has 6"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }
}
