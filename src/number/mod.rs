//! Exact decimal numbers
//!
//! This module provides [`Decimal`], the value type every stack entry holds:
//! - [`constants`]: stored and displayed scale limits
//! - `format`: the fixed-point display form
//!
//! # Representation
//!
//! A number is an arbitrary-precision unscaled integer plus a scale (count of
//! fractional digits):
//!
//! ```text
//! value = unscaled × 10^-scale
//! ```
//!
//! Every constructor normalizes: the scale is capped at
//! [`constants::DEFAULT_SCALE`] with round-half-to-even, and trailing
//! fractional zeros are stripped. Because the normalized form is unique, the
//! derived equality and hash are numeric (`5` equals `5.00`).

pub mod constants;
mod format;

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::{CalcError, Result};
use constants::DEFAULT_SCALE;

/// Rounding applied when fractional digits are discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Nearest neighbour, ties go to the even one
    HalfEven,
    /// Toward negative infinity
    Floor,
}

/// Immutable arbitrary-precision decimal number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn zero() -> Self {
        Decimal {
            unscaled: BigInt::zero(),
            scale: 0,
        }
    }

    /// Parse a base-10 literal: optional sign, digits, optional fractional part.
    ///
    /// Surrounding whitespace is ignored. Exponents are not accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || CalcError::InvalidNumber {
            text: text.to_string(),
        };

        let trimmed = text.trim();
        let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let magnitude: BigInt = format!("{integer}{fraction}")
            .parse()
            .map_err(|_| invalid())?;
        let unscaled = if negative { -magnitude } else { magnitude };

        Ok(Self::from_raw(unscaled, scale))
    }

    /// Build a number from an unscaled integer and its scale, normalizing it
    pub fn from_raw(unscaled: BigInt, scale: u32) -> Self {
        if scale > DEFAULT_SCALE {
            let capped = rescale(&unscaled, scale, DEFAULT_SCALE, RoundingMode::HalfEven);
            Self::normalized(capped, DEFAULT_SCALE)
        } else {
            Self::normalized(unscaled, scale)
        }
    }

    /// Strip trailing fractional zeros; zero always has scale 0
    fn normalized(mut unscaled: BigInt, mut scale: u32) -> Self {
        if unscaled.is_zero() {
            return Self::zero();
        }

        let ten = BigInt::from(10u8);
        while scale > 0 {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }

        Decimal { unscaled, scale }
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Unscaled value expressed at a scale at least as large as the current one
    fn aligned(&self, scale: u32) -> BigInt {
        &self.unscaled * pow10(scale - self.scale)
    }

    /// Exact quotient `self / divisor`, rounded half-even to
    /// [`DEFAULT_SCALE`] fractional digits
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(CalcError::DivisionByZero);
        }

        // Stored scales never exceed DEFAULT_SCALE, so the shift is non-negative
        let shift = DEFAULT_SCALE + divisor.scale - self.scale;
        let numerator = &self.unscaled * pow10(shift);
        let quotient = divide_rounded(&numerator, &divisor.unscaled, RoundingMode::HalfEven);

        Ok(Self::from_raw(quotient, DEFAULT_SCALE))
    }

    /// Square root, correctly rounded half-even to [`DEFAULT_SCALE`] digits
    pub fn sqrt(&self) -> Result<Decimal> {
        if self.is_negative() {
            return Err(CalcError::NegativeSquareRoot {
                value: self.to_display_string(),
            });
        }

        // Integer root at one guard digit past the target scale:
        // floor(sqrt(unscaled × 10^-scale) × 10^guard)
        let guard_scale = DEFAULT_SCALE + 1;
        let radicand = &self.unscaled * pow10(2 * guard_scale - self.scale);
        let root = radicand.sqrt();
        let exact = &root * &root == radicand;

        let (truncated, guard_digit) = root.div_rem(&BigInt::from(10u8));
        let round_up = match guard_digit.cmp(&BigInt::from(5u8)) {
            Ordering::Greater => true,
            Ordering::Less => false,
            // Anything left over after the 5 puts us past the midpoint
            Ordering::Equal => !exact || truncated.is_odd(),
        };
        let unscaled = if round_up { truncated + 1u8 } else { truncated };

        Ok(Self::from_raw(unscaled, DEFAULT_SCALE))
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Decimal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::parse(s)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::from_raw(BigInt::from(value), 0)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::from_raw(self.aligned(scale) + rhs.aligned(scale), scale)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::from_raw(self.aligned(scale) - rhs.aligned(scale), scale)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::from_raw(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Move `unscaled` from scale `from` to scale `to`, rounding any discarded
/// digits with `mode`
pub(crate) fn rescale(unscaled: &BigInt, from: u32, to: u32, mode: RoundingMode) -> BigInt {
    match to.cmp(&from) {
        Ordering::Equal => unscaled.clone(),
        Ordering::Greater => unscaled * pow10(to - from),
        Ordering::Less => divide_rounded(unscaled, &pow10(from - to), mode),
    }
}

/// Integer division with the quotient rounded by `mode`
pub(crate) fn divide_rounded(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    // Positive divisor: the remainder then carries the sign of the true quotient
    let (numerator, denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator.clone(), denominator.clone())
    };

    let (quotient, remainder) = numerator.div_rem(&denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let away_from_zero = match mode {
        RoundingMode::Floor => remainder.is_negative(),
        RoundingMode::HalfEven => match (remainder.abs() * 2u8).cmp(&denominator) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => quotient.is_odd(),
        },
    };

    if !away_from_zero {
        quotient
    } else if remainder.is_negative() {
        quotient - 1u8
    } else {
        quotient + 1u8
    }
}
