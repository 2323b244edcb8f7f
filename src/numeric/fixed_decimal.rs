// ============================================================================
// Fixed-Point Decimal
// Unsigned scaled-integer arithmetic with a runtime decimal place count
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point decimal number with a runtime precision.
///
/// Represents `value / 10^places`. Both fields travel together: every
/// operation that combines two values checks that their place counts agree
/// and fails with [`NumericError::PrecisionMismatch`] instead of silently
/// mixing scales. Changing precision is an explicit [`rescale`](Self::rescale).
///
/// Equality and hashing are structural: `1.0` (`10` at 1 place) and `1.00`
/// (`100` at 2 places) are different values.
///
/// # Example
/// ```
/// use wallet_engine::numeric::FixedPointDecimal;
///
/// let balance = FixedPointDecimal::new(1_000_000, 4); // 100.0000
/// let debit = FixedPointDecimal::new(1_000, 4);       //   0.1000
/// let rest = balance.checked_sub(debit).unwrap();
/// assert_eq!(rest.to_string(), "99.9000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPointDecimal {
    value: u64,
    places: u8,
}

/// 10^exp, or `None` when it does not fit in a u64 (exp > 19).
#[inline]
fn pow10(exp: u32) -> Option<u64> {
    10u64.checked_pow(exp)
}

impl FixedPointDecimal {
    /// Largest place count whose scale factor (10^places) fits in a u64.
    pub const MAX_PLACES: u8 = 19;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw scaled magnitude and a place count.
    ///
    /// No validation is performed; any combination is accepted.
    #[inline]
    pub const fn new(value: u64, places: u8) -> Self {
        Self { value, places }
    }

    /// Zero at the given precision.
    #[inline]
    pub const fn zero(places: u8) -> Self {
        Self { value: 0, places }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw scaled magnitude.
    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of implied decimal places.
    #[inline]
    pub const fn places(self) -> u8 {
        self.places
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Integer part (truncated).
    pub fn integer_part(self) -> u64 {
        match pow10(self.places as u32) {
            Some(scale) => self.value / scale,
            None => 0,
        }
    }

    /// Fractional part as a scaled magnitude.
    pub fn fractional_part(self) -> u64 {
        match pow10(self.places as u32) {
            Some(scale) => self.value % scale,
            None => self.value,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    #[inline]
    fn ensure_same_places(self, rhs: Self) -> NumericResult<()> {
        if self.places == rhs.places {
            Ok(())
        } else {
            Err(NumericError::PrecisionMismatch {
                left: self.places,
                right: rhs.places,
            })
        }
    }

    /// Checked addition.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the operands have different place counts
    /// - `Overflow` if the magnitude exceeds u64::MAX
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_same_places(rhs)?;
        self.value
            .checked_add(rhs.value)
            .map(|value| Self::new(value, self.places))
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the operands have different place counts
    /// - `Underflow` if `rhs` is larger than `self`
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_same_places(rhs)?;
        self.value
            .checked_sub(rhs.value)
            .map(|value| Self::new(value, self.places))
            .ok_or(NumericError::Underflow)
    }

    /// Checked multiplication.
    ///
    /// The product of a value at `p` places and a value at `q` places has
    /// `p + q` places; no rounding happens here. Use [`rescale`](Self::rescale)
    /// to bring the result back to a target precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds u64::MAX or the place count
    /// exceeds u8::MAX.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let places = self
            .places
            .checked_add(rhs.places)
            .ok_or(NumericError::Overflow)?;
        self.value
            .checked_mul(rhs.value)
            .map(|value| Self::new(value, places))
            .ok_or(NumericError::Overflow)
    }

    /// Multiplication delivered at `target_places`.
    ///
    /// Uses a u128 intermediate so the full-precision product never
    /// overflows, then truncates (or scales up) to the target precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit in a u64 at `target_places`.
    pub fn checked_mul_rescaled(self, rhs: Self, target_places: u8) -> NumericResult<Self> {
        let product = (self.value as u128) * (rhs.value as u128);
        if product == 0 {
            return Ok(Self::zero(target_places));
        }

        let product_places = self.places as u32 + rhs.places as u32;
        let target = target_places as u32;

        let scaled = if target >= product_places {
            10u128
                .checked_pow(target - product_places)
                .and_then(|factor| product.checked_mul(factor))
                .ok_or(NumericError::Overflow)?
        } else {
            match 10u128.checked_pow(product_places - target) {
                Some(factor) => product / factor,
                None => 0,
            }
        };

        u64::try_from(scaled)
            .map(|value| Self::new(value, target_places))
            .map_err(|_| NumericError::Overflow)
    }

    /// Multiplication that keeps the left operand's place count.
    ///
    /// The result magnitude is `self.value * rhs.value` but is still read at
    /// `self.places`, so it overstates the mathematical product by
    /// `10^rhs.places`. Kept for ledgers that settled with this rule.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the operands have different place counts
    /// - `Overflow` if the magnitude exceeds u64::MAX
    #[inline]
    pub fn checked_mul_retaining_places(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_same_places(rhs)?;
        self.value
            .checked_mul(rhs.value)
            .map(|value| Self::new(value, self.places))
            .ok_or(NumericError::Overflow)
    }

    /// Express the same amount at `target_places`.
    ///
    /// Scaling up multiplies the magnitude by `10^(target - places)`.
    /// Scaling down divides by `10^(places - target)` and truncates; it never
    /// fails, and a shift wider than any u64 yields zero.
    ///
    /// # Errors
    /// Returns `Overflow` if scaling up does not fit in a u64.
    pub fn rescale(self, target_places: u8) -> NumericResult<Self> {
        match target_places.cmp(&self.places) {
            Ordering::Equal => Ok(self),
            Ordering::Greater => {
                if self.value == 0 {
                    return Ok(Self::zero(target_places));
                }
                let factor = pow10((target_places - self.places) as u32)
                    .ok_or(NumericError::Overflow)?;
                self.value
                    .checked_mul(factor)
                    .map(|value| Self::new(value, target_places))
                    .ok_or(NumericError::Overflow)
            },
            Ordering::Less => {
                let value = match pow10((self.places - target_places) as u32) {
                    Some(factor) => self.value / factor,
                    None => 0,
                };
                Ok(Self::new(value, target_places))
            },
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two values of equal precision.
    ///
    /// # Errors
    /// Returns `PrecisionMismatch` if the operands have different place counts.
    #[inline]
    pub fn checked_cmp(self, rhs: Self) -> NumericResult<Ordering> {
        self.ensure_same_places(rhs)?;
        Ok(self.value.cmp(&rhs.value))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedPointDecimal({}, value={}, places={})",
            self, self.value, self.places
        )
    }
}

impl fmt::Display for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.to_string();
        let places = self.places as usize;

        if places == 0 {
            write!(f, "{}", digits)
        } else if digits.len() > places {
            let (int_part, frac_part) = digits.split_at(digits.len() - places);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{:0>width$}", digits, width = places)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedPointDecimal {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if `places` exceeds the 28-digit scale that
    /// `Decimal` can carry.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.value as i128, self.places as u32)
            .map_err(|_| NumericError::PrecisionLoss)
    }

    /// Convert from rust_decimal::Decimal, keeping its scale as the place count.
    ///
    /// # Errors
    /// - `Underflow` for negative decimals
    /// - `Overflow` if the mantissa does not fit in a u64
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let mantissa = d.mantissa();
        if mantissa < 0 {
            return Err(NumericError::Underflow);
        }
        let value = u64::try_from(mantissa).map_err(|_| NumericError::Overflow)?;
        let places = u8::try_from(d.scale()).map_err(|_| NumericError::PrecisionLoss)?;
        Ok(Self::new(value, places))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FixedPointDecimal {
    type Err = NumericError;

    /// Parse from a decimal string. The place count is the number of digits
    /// after the decimal point.
    ///
    /// # Examples
    /// - "100.0000" -> value 1_000_000, places 4
    /// - "42" -> value 42, places 0
    /// - "0.5" -> value 5, places 1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty())
            || !all_digits(int_str)
            || !all_digits(frac_str)
        {
            return Err(NumericError::InvalidInput);
        }

        let places = u8::try_from(frac_str.len()).map_err(|_| NumericError::PrecisionLoss)?;

        let combined = format!("{}{}", int_str, frac_str);
        let value = combined.parse::<u64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => NumericError::Overflow,
            _ => NumericError::InvalidInput,
        })?;

        Ok(Self::new(value, places))
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Wallet balance of a single asset
pub type Balance = FixedPointDecimal;

/// Exchange rate for an asset pair, at whatever precision the oracle publishes
pub type ExchangeRate = FixedPointDecimal;

// ============================================================================
// Tests
// ============================================================================
