use std::fmt;

use crate::error::{SchemaError, SchemaResult};

/// A strictly positive `multipleOf` divisor.
///
/// `Multiplier<i128>` serves integer schemas (exact remainder),
/// `Multiplier<f64>` serves number schemas (exact decimal remainder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiplier<T>(T);

impl<T: Copy> Multiplier<T> {
    pub fn value(&self) -> T {
        self.0
    }
}

impl Multiplier<i128> {
    pub fn new(value: i128) -> SchemaResult<Self> {
        if value <= 0 {
            return Err(SchemaError::invalid("multiplier must be greater than 0"));
        }
        Ok(Multiplier(value))
    }

    pub fn divides(&self, n: i128) -> bool {
        n % self.0 == 0
    }
}

impl Multiplier<f64> {
    pub fn new(value: f64) -> SchemaResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SchemaError::invalid("multiplier must be greater than 0"));
        }
        Ok(Multiplier(value))
    }

    /// True iff `n` is an integer multiple of the divisor.
    ///
    /// Both operands are taken at their shortest round-trip decimal form, so
    /// `0.3` is a multiple of `0.1` even though the binary quotient is not
    /// integral. The check is exact for every finite operand.
    pub fn divides(&self, n: f64) -> bool {
        match (Decimal::from_f64(n), Decimal::from_f64(self.0)) {
            (Some(a), Some(b)) => a.is_multiple_of(&b),
            _ => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Multiplier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// `significand * 10^exponent`, sign dropped.
struct Decimal {
    significand: u128,
    exponent: i32,
}

impl Decimal {
    fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        // shortest round-trip digits, e.g. "1.2345e3"
        let text = format!("{:e}", x.abs());
        let (digits, exponent) = text.split_once('e')?;
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        let mut significand: u128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            significand = significand
                .checked_mul(10)?
                .checked_add(u128::from(b.checked_sub(b'0')?))?;
        }
        let exponent = exponent.parse::<i32>().ok()? - i32::try_from(frac_part.len()).ok()?;
        Some(Decimal {
            significand,
            exponent,
        })
    }

    fn is_multiple_of(&self, divisor: &Decimal) -> bool {
        if self.significand == 0 {
            return true;
        }
        if divisor.significand == 0 {
            return false;
        }
        let shift = self.exponent.abs_diff(divisor.exponent);
        if self.exponent >= divisor.exponent {
            // significand * 10^shift mod divisor, one decade at a time
            let modulus = divisor.significand;
            let mut rem = self.significand % modulus;
            for _ in 0..shift {
                if rem == 0 {
                    break;
                }
                rem = rem * 10 % modulus;
            }
            rem == 0
        } else {
            10u128
                .checked_pow(shift)
                .and_then(|factor| divisor.significand.checked_mul(factor))
                .is_some_and(|scaled| self.significand % scaled == 0)
        }
    }
}
