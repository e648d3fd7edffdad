// ============================================================================
// Number
// Integer or floating-point operand with checked arithmetic primitives
// ============================================================================

use super::errors::{CalcError, CalcResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated numeric operand: either an `i64` or an `f64`.
///
/// Integer arithmetic stays integral as long as both operands are integers
/// and the result fits in `i64`. Any float operand promotes the operation to
/// `f64`.
///
/// Equality and ordering are numeric across kinds, so `Int(5) == Float(5.0)`.
///
/// # Example
/// ```
/// use calculator::numeric::Number;
///
/// let n: Number = "42".parse().unwrap();
/// assert_eq!(n, Number::Int(42));
/// assert!(n.is_int());
///
/// let x: Number = "2.5".parse().unwrap();
/// assert_eq!(x, Number::Float(2.5));
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Convert to `f64`. Integers beyond 2^53 lose precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Check if value is zero (`-0.0` included).
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// Check if value is strictly below zero. `-0.0` and NaN are not negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(i) => i < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    // ========================================================================
    // Arithmetic Primitives
    // ========================================================================
    //
    // The checked_* methods return `None` only when an integer-only
    // computation overflows i64. Callers decide whether to promote or fail.

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_add(b).map(Number::Int),
            _ => Some(Number::Float(self.to_f64() + rhs.to_f64())),
        }
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_sub(b).map(Number::Int),
            _ => Some(Number::Float(self.to_f64() - rhs.to_f64())),
        }
    }

    /// Checked multiplication.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_mul(b).map(Number::Int),
            _ => Some(Number::Float(self.to_f64() * rhs.to_f64())),
        }
    }

    /// Checked sum of any number of operands.
    ///
    /// An all-integer input is summed in i128, so only a final result outside
    /// i64 overflows; intermediate overflow does not.
    pub fn checked_sum(values: &[Self]) -> Option<Self> {
        let exact: Option<i128> = values.iter().try_fold(0i128, |sum, n| match *n {
            Number::Int(i) => Some(sum + i128::from(i)),
            Number::Float(_) => None,
        });

        match exact {
            Some(total) => i64::try_from(total).ok().map(Number::Int),
            None => Some(Number::Float(
                values.iter().fold(0.0, |sum, n| sum + n.to_f64()),
            )),
        }
    }

    /// Checked exponentiation.
    ///
    /// Integer base with a non-negative integer exponent stays integral.
    /// A negative integer exponent or any float operand yields `powf`.
    pub fn checked_pow(self, exponent: Self) -> Option<Self> {
        match (self, exponent) {
            (Number::Int(base), Number::Int(exp)) if exp >= 0 => match base {
                // Exponents past u32::MAX are still exact for these bases
                0 => Some(Number::Int(if exp == 0 { 1 } else { 0 })),
                1 => Some(Number::Int(1)),
                -1 => Some(Number::Int(if exp % 2 == 0 { 1 } else { -1 })),
                _ => u32::try_from(exp)
                    .ok()
                    .and_then(|exp| base.checked_pow(exp))
                    .map(Number::Int),
            },
            _ => Some(Number::Float(self.to_f64().powf(exponent.to_f64()))),
        }
    }

    /// Checked absolute value. Only `i64::MIN` overflows.
    #[inline]
    pub fn checked_abs(self) -> Option<Self> {
        match self {
            Number::Int(i) => i.checked_abs().map(Number::Int),
            Number::Float(f) => Some(Number::Float(f.abs())),
        }
    }

    /// Remainder of floor division: the result takes the sign of `rhs`.
    ///
    /// `rhs` must be non-zero; the zero check belongs to the caller.
    pub fn floor_rem(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                // wrapping_rem maps i64::MIN % -1 to 0 instead of panicking
                let r = a.wrapping_rem(b);
                if r != 0 && (r < 0) != (b < 0) {
                    Number::Int(r + b)
                } else {
                    Number::Int(r)
                }
            }
            _ => {
                let (a, b) = (self.to_f64(), rhs.to_f64());
                let r = a % b;
                if r == 0.0 {
                    Number::Float(0.0_f64.copysign(b))
                } else if (r < 0.0) != (b < 0.0) {
                    Number::Float(r + b)
                } else {
                    Number::Float(r)
                }
            }
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Total ordering across kinds.
    ///
    /// Integers compare exactly, also against floats past 2^53. Two floats
    /// use IEEE-754 `totalOrder` (`-0.0 < 0.0`, NaN above +inf). An integer
    /// zero equals `0.0` and ranks above `-0.0`.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => a.total_cmp(&b),
            (Number::Int(i), Number::Float(f)) => total_cmp_int_float(i, f),
            (Number::Float(f), Number::Int(i)) => total_cmp_int_float(i, f).reverse(),
        }
    }
}

/// Exact comparison of an integer with a float, `None` for NaN.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63 is exactly representable; i64 covers [-2^63, 2^63)
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    let whole = f.trunc();
    if whole >= LIMIT {
        return Some(Ordering::Less);
    }
    if whole < -LIMIT {
        return Some(Ordering::Greater);
    }

    // Integral and in range, so the cast is exact
    let ordering = i.cmp(&(whole as i64)).then_with(|| {
        let fraction = f - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    Some(ordering)
}

fn total_cmp_int_float(i: i64, f: f64) -> Ordering {
    match cmp_int_float(i, f) {
        None if f.is_sign_negative() => Ordering::Greater,
        None => Ordering::Less,
        Some(Ordering::Equal) if f.is_sign_negative() => Ordering::Greater,
        Some(ordering) => ordering,
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Number::Int(0)
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                cmp_int_float(*i, *f) == Some(Ordering::Equal)
            }
        }
    }
}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(i), Number::Float(f)) => cmp_int_float(*i, *f),
            (Number::Float(f), Number::Int(i)) => cmp_int_float(*i, *f).map(Ordering::reverse),
        }
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "Int({})", i),
            Number::Float(x) => write!(f, "Float({:?})", x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional marker: 5.0 rather than 5
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Number {
    type Err = CalcError;

    /// Parse a single numeric literal.
    ///
    /// # Examples
    /// - "42" -> Int(42)
    /// - "-0.5" -> Float(-0.5)
    /// - "1e3" -> Float(1000.0)
    /// - "99999999999999999999" -> Float (does not fit i64)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CalcError::InvalidNumber(s.to_string()));
        }

        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }

        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| CalcError::InvalidNumber(s.to_string()))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Number {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// A decimal with scale 0 becomes `Int` when it fits in i64; everything
    /// else becomes `Float`.
    ///
    /// # Errors
    /// - `InvalidNumber` if the value has no `f64` representation
    pub fn from_decimal(d: rust_decimal::Decimal) -> CalcResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        if d.scale() == 0 {
            if let Some(i) = d.to_i64() {
                return Ok(Number::Int(i));
            }
        }

        d.to_f64()
            .map(Number::Float)
            .ok_or_else(|| CalcError::InvalidNumber(d.to_string()))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `InvalidNumber` for NaN, infinities and floats outside Decimal range
    pub fn to_decimal(self) -> CalcResult<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        match self {
            Number::Int(i) => Ok(rust_decimal::Decimal::from(i)),
            Number::Float(f) => rust_decimal::Decimal::from_f64(f)
                .ok_or_else(|| CalcError::InvalidNumber(self.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
