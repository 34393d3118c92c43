//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    R$ 0.50 is stored as 50; two of them sum to exactly 100              │
//! │                                                                         │
//! │  The backend sends prices as numeric strings ("0.50") or numbers.       │
//! │  They are converted to centavos ONCE, at the wire boundary, with        │
//! │  half-up rounding. Everything after that is exact integer math.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use balcao_core::money::Money;
//!
//! let price = Money::parse_decimal("0.50").unwrap();
//! let line: Money = price * 2;
//! assert_eq!(line.to_string(), "1.00");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: the backend reports debts that may exceed limits,
///   and signed math keeps subtraction total
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Rounding at the boundary only**: half-up when parsing an external
///   decimal; sums of centavos are exact and never re-rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Error parsing a decimal amount into centavos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid monetary value: {0:?}")]
pub struct ParseMoneyError(pub String);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses a plain decimal string (`"0.50"`, `"10"`, `"-3.7"`) into
    /// centavos using integer math only.
    ///
    /// Digits beyond the second decimal place are rounded half-up. This is
    /// the single place where rounding happens; see the module docs.
    ///
    /// ## Example
    /// ```rust
    /// use balcao_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("0.50").unwrap().cents(), 50);
    /// assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
    /// assert_eq!(Money::parse_decimal("1.005").unwrap().cents(), 101);
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Self, ParseMoneyError> {
        let s = input.trim();
        let err = || ParseMoneyError(input.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        // Whole units, in i128 to keep overflow detectable
        let mut cents: i128 = 0;
        for b in int_part.bytes() {
            cents = cents * 10 + i128::from(b - b'0');
        }
        cents *= 100;

        // First two fractional digits are centavos; the third decides rounding
        let mut frac = frac_part.bytes();
        if let Some(b) = frac.next() {
            cents += i128::from(b - b'0') * 10;
        }
        if let Some(b) = frac.next() {
            cents += i128::from(b - b'0');
        }
        if let Some(b) = frac.next() {
            if b - b'0' >= 5 {
                cents += 1;
            }
        }

        let cents = i64::try_from(cents).map_err(|_| err())?;
        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Converts a float amount (whole currency units) into centavos,
    /// rounding half away from zero.
    ///
    /// Only used at the deserialization boundary when the backend chose to
    /// send a JSON number instead of a numeric string.
    pub fn from_f64(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the plain 2-decimal form: `"1.00"`, `"-5.50"`.
///
/// User-facing messages prepend the currency marker (`R$ `) themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Serde: tolerant of the backend's numeric-string-or-number habit
// =============================================================================

/// Serializes as the 2-decimal string form, the representation the rest of
/// the system (and the backend) treats as canonical.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a JSON number or a numeric string.
///
/// The catalog endpoints are not consistent about which one they emit
/// (`preco: "0.50"` and `preco: 0.5` both occur in the wild), so both must
/// decode to the same centavo value.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount as a number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money::from_cents(v * 100))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                Ok(Money::from_cents(v as i64 * 100))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Ok(Money::from_f64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                Money::parse_decimal(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
