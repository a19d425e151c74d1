//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! formatter seam the storefront injects for locale-aware display.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    The cart endpoints already speak minor units (total_price: 1999),    │
//! │    so we keep every amount as an i64 end to end and only convert at     │
//! │    the display boundary.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Formatting
//! The page owns the currency convention (symbol, locale), so user-facing
//! rendering goes through [`MoneyFormatter`], which the host injects.
//! `Display` exists for logs and tests only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for refunds and adjustments
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: decodes directly from the integer amounts the
///   cart endpoints return (`"total_price": 1999`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let price = Money::from_minor_units(1099); // Represents $10.99
    /// assert_eq!(price.minor_units(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (dollars for USD).
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display implementation shows money in a fixed `$d.cc` form.
///
/// ## Note
/// This is for diagnostics. User-facing rendering must go through the
/// injected [`MoneyFormatter`] so the store's locale convention applies.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Formatter Seam
// =============================================================================

/// Formats an amount for user-facing display.
///
/// The surrounding page supplies the store's money convention (symbol,
/// locale, decimal separator). Components never format money themselves;
/// they call whatever the host injected.
pub trait MoneyFormatter: Send + Sync {
    /// Renders the amount as the store displays it (e.g. `"$19.99"`).
    fn format(&self, amount: Money) -> String;
}

/// Plain symbol-prefix formatter, the default when the host injects nothing.
///
/// ## Example
/// ```rust
/// use vitrine_core::money::{Money, MoneyFormatter, SymbolFormatter};
///
/// let fmt = SymbolFormatter::new("$");
/// assert_eq!(fmt.format(Money::from_minor_units(1999)), "$19.99");
/// ```
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    symbol: String,
}

impl SymbolFormatter {
    /// Creates a formatter with the given currency symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        SymbolFormatter {
            symbol: symbol.into(),
        }
    }
}

impl Default for SymbolFormatter {
    fn default() -> Self {
        SymbolFormatter::new("$")
    }
}

impl MoneyFormatter for SymbolFormatter {
    fn format(&self, amount: Money) -> String {
        let sign = if amount.minor_units() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.symbol,
            amount.major_part().abs(),
            amount.minor_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let money = Money::from_minor_units(1099);
        assert_eq!(money.minor_units(), 1099);
        assert_eq!(money.major_part(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor_units(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_minor_units(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_minor_units(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_minor_units(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor_units(1000);
        let b = Money::from_minor_units(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.minor_units(), 1500);
    }

    #[test]
    fn test_zero_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_minor_units(1).is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_transparent_serde() {
        // Endpoint JSON carries bare integers, not wrapped objects
        let money: Money = serde_json::from_str("1999").unwrap();
        assert_eq!(money.minor_units(), 1999);
        assert_eq!(serde_json::to_string(&money).unwrap(), "1999");
    }

    #[test]
    fn test_symbol_formatter() {
        let fmt = SymbolFormatter::default();
        assert_eq!(fmt.format(Money::from_minor_units(1999)), "$19.99");
        assert_eq!(fmt.format(Money::from_minor_units(5)), "$0.05");
        assert_eq!(fmt.format(Money::from_minor_units(-250)), "-$2.50");

        let euro = SymbolFormatter::new("€");
        assert_eq!(euro.format(Money::from_minor_units(100)), "€1.00");
    }
}
