//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts are kept exactly as entered.
//! Rounding to cents happens only when an amount is formatted.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// An exact monetary amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Wrap an exact decimal amount
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The exact amount
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "+10", "$10.50", "10", ".5", "10." and
    /// exponent forms such as "1e3" or "2.5E-1", with surrounding whitespace.
    /// The value is kept exactly; nothing is rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let literal = normalize_literal(rest)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        // A well-formed literal that still fails does not fit in a Decimal
        let value = match literal.exponent {
            Some(_) => Decimal::from_scientific(&literal.to_string()),
            None => Decimal::from_str(&literal.to_string()),
        }
        .map_err(|_| MoneyParseError::Overflow(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Whether `self` is strictly more than `bps` basis points of `whole`
    ///
    /// `share_exceeds(whole, 3000)` is exactly `self / whole > 0.30`.
    /// Returns `false` when `whole` is zero.
    pub fn share_exceeds(self, whole: Money, bps: u32) -> bool {
        if whole.is_zero() {
            return false;
        }
        let limit = Decimal::new(i64::from(bps), 4);
        match whole.0.checked_mul(limit) {
            Some(bound) => self.0 > bound,
            // The bound is beyond any representable amount
            None => false,
        }
    }

    /// `self` as a percentage of `whole`, or `None` when `whole` is zero
    pub fn percent_of(self, whole: Money) -> Option<f64> {
        self.0
            .checked_div(whole.0)?
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_f64()
    }

    /// Format with a currency symbol, rounded half away from zero to cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let mut magnitude = rounded.abs();
        magnitude.rescale(2);

        if rounded < Decimal::ZERO {
            format!("-{}{}", symbol, magnitude)
        } else {
            format!("{}{}", symbol, magnitude)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// An unsigned decimal literal split into its parts
struct Literal<'a> {
    whole: &'a str,
    fraction: &'a str,
    exponent: Option<(bool, &'a str)>,
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.whole.is_empty() { "0" } else { self.whole })?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        if let Some((negative, digits)) = self.exponent {
            write!(f, "e{}{}", if negative { "-" } else { "" }, digits)?;
        }
        Ok(())
    }
}

/// Split `digits[.digits][(e|E)[+|-]digits]`, rejecting anything else
fn normalize_literal(text: &str) -> Option<Literal<'_>> {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let exponent = match exponent {
        None => None,
        Some(exp) => {
            let (negative, digits) = match exp.strip_prefix('-') {
                Some(digits) => (true, digits),
                None => (false, exp.strip_prefix('+').unwrap_or(exp)),
            };
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            Some((negative, digits))
        }
    };

    Some(Literal {
        whole,
        fraction,
        exponent,
    })
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
