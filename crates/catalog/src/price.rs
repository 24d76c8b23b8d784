//! Price — non-negative decimal amount with two fractional digits.
//!
//! Stored as whole cents so that `9.50` and `9.5` compare equal and no float
//! rounding leaks into listings.

use core::fmt;
use core::str::FromStr;

use crate::error::PriceError;

/// A book price in cents.
///
/// Wraps a `u32` cent counter; the largest representable price is
/// `42949672.95`. Construct with [`Price::from_cents`] or parse text with
/// [`str::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Price(u32);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// Return the price in cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }

    /// Whole units before the decimal point.
    #[must_use]
    pub const fn units(self) -> u32 {
        self.0 / 100
    }

    /// The two digits after the decimal point.
    #[must_use]
    pub const fn fraction(self) -> u32 {
        self.0 % 100
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Parse `"12"`, `"9.5"` or `"19.99"`.
    ///
    /// Surrounding whitespace is ignored. Signs, exponents, thousands
    /// separators and a bare or trailing `.` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        let units = parse_digits(whole)?;
        let cents = match frac {
            None => 0,
            Some(frac) if frac.len() > 2 => {
                if frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(PriceError::TooPrecise);
                }
                return Err(PriceError::Invalid);
            }
            Some(frac) => {
                let value = parse_digits(frac)?;
                // "9.5" means fifty cents, not five.
                if frac.len() == 1 {
                    value.checked_mul(10).ok_or(PriceError::Overflow)?
                } else {
                    value
                }
            }
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or(PriceError::Overflow)
    }
}

/// Parse a non-empty run of ASCII digits.
fn parse_digits(digits: &str) -> Result<u32, PriceError> {
    if digits.is_empty() {
        return Err(PriceError::Invalid);
    }
    digits.bytes().try_fold(0u32, |acc, b| {
        if !b.is_ascii_digit() {
            return Err(PriceError::Invalid);
        }
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u32::from(b.wrapping_sub(b'0'))))
            .ok_or(PriceError::Overflow)
    })
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.fraction())
    }
}
