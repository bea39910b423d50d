//! Fixed-point money.
//!
//! Amounts are integer micros (1 unit = 1_000_000 micros). Arithmetic never
//! rounds; rounding to cents happens only in [`Money::round_to_cents`] and the
//! `Display` impl, so long carts do not accumulate rounding error.
//!
//! The operators saturate at the `i64` bounds. Code that must notice an
//! out-of-range amount uses [`Money::checked_add`] and [`Money::checked_mul`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

const MICROS_PER_UNIT: i64 = 1_000_000;
const MICROS_PER_CENT: i64 = 10_000;
const MAX_FRACTION_DIGITS: usize = 6;

/// A signed amount of money in micro-units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

/// Errors produced when parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("amount is empty")]
    Empty,
    #[error("amount could not be parsed: '{0}'")]
    Invalid(String),
    #[error("amount has more than 6 decimal places: '{0}'")]
    TooManyDecimalPlaces(String),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_micros(micros: i64) -> Self {
        Money(micros)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MICROS_PER_CENT)
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Nearest whole cent, halves rounded away from zero.
    pub fn round_to_cents(self) -> i64 {
        let half = MICROS_PER_CENT / 2;
        if self.0 >= 0 {
            self.0.saturating_add(half) / MICROS_PER_CENT
        } else {
            self.0.saturating_sub(half) / MICROS_PER_CENT
        }
    }

    /// Formats with a currency symbol prefix, e.g. `€10.99` or `-€2.00`.
    pub fn format_with(self, symbol: &str) -> String {
        let cents = self.round_to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!("{sign}{symbol}{}.{:02}", cents / 100, cents % 100)
    }

    /// Full-precision decimal text with at least two fraction digits.
    fn to_exact_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let micros = self.0.unsigned_abs();
        let units = micros / MICROS_PER_UNIT as u64;
        let mut fraction = format!("{:06}", micros % MICROS_PER_UNIT as u64);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }
        format!("{sign}{units}.{fraction}")
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses a decimal string (`"8.99"`, `"-2"`, `"+0.5"`) without floating point.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }
        let invalid = || MoneyError::Invalid(s.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }
        if frac_part.len() > MAX_FRACTION_DIGITS {
            return Err(MoneyError::TooManyDecimalPlaces(s.to_string()));
        }

        let int_val: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let frac_val: i64 = format!("{frac_part:0<6}").parse().map_err(|_| invalid())?;

        let micros = int_val
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|v| v.checked_add(frac_val))
            .ok_or_else(invalid)?;
        Ok(Money(if negative { -micros } else { micros }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.round_to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Mul<u32> for Money {
    type Output = Money;
    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_exact_string())
    }
}

/// Menu data writes prices as JSON numbers (`8.99`); receipts write them as
/// strings. Numbers go through their shortest decimal text, so `8.99` becomes
/// exactly 8_990_000 micros.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Integer(i64),
            Float(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Integer(units) => units
                .checked_mul(MICROS_PER_UNIT)
                .map(Money)
                .ok_or_else(|| de::Error::custom("amount out of range")),
            Repr::Float(value) if value.is_finite() => {
                value.to_string().parse().map_err(de::Error::custom)
            }
            Repr::Float(value) => Err(de::Error::custom(format!("amount is not finite: {value}"))),
            Repr::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}
