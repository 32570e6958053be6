//! Money value object.
//!
//! Provides a strongly-typed representation of monetary values backed by
//! `rust_decimal::Decimal`. Amounts are stored exactly: the fractional digits
//! supplied at construction survive arithmetic and display unchanged, and no
//! binary floating point is involved at any point.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when working with Money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount string could not be parsed as a valid decimal.
    InvalidAmount(String),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(value) => {
                write!(formatter, "Invalid amount: {value}")
            }
        }
    }
}

impl std::error::Error for MoneyError {}

/// An exact monetary value.
///
/// `Money` wraps a `Decimal` amount and provides:
///
/// - **Precision**: exact decimal arithmetic, scale-preserving
/// - **Totality**: `add` and `subtract` never fail; sign policy is enforced
///   by the operations that consume amounts, not by the value itself
/// - **Ordering**: numeric comparison across different scales
///
/// # Examples
///
/// ```rust
/// use banco::domain::value_objects::Money;
///
/// let balance = Money::parse("1000.12345").unwrap();
/// let after = balance.subtract(&Money::new(100));
///
/// assert_eq!(after.to_string(), "900.12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new `Money` value from an integer number of whole units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::Money;
    ///
    /// let amount = Money::new(2500);
    /// assert_eq!(amount.to_string(), "2500");
    /// ```
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
        }
    }

    /// Creates a new `Money` value from a `Decimal` amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let money = Money::from_decimal(Decimal::new(1050, 2)); // 10.50
    /// assert_eq!(money.to_string(), "10.50");
    /// ```
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Parses a string amount into `Money`.
    ///
    /// The scale of the input is preserved exactly: `"1000.12345"` stays
    /// `1000.12345`, not an approximation.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the string cannot be parsed as
    /// a decimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::Money;
    ///
    /// let money = Money::parse("1500.8989").unwrap();
    /// assert_eq!(money.to_string(), "1500.8989");
    ///
    /// assert!(Money::parse("not-a-number").is_err());
    /// ```
    pub fn parse(amount: &str) -> Result<Self, MoneyError> {
        amount.parse::<Decimal>().map_or_else(
            |_| Err(MoneyError::InvalidAmount(amount.to_string())),
            |decimal| Ok(Self::from_decimal(decimal)),
        )
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the amount as a `Decimal`.
    #[must_use]
    pub const fn amount(&self) -> &Decimal {
        &self.amount
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Decimal::is_zero is not const
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the amount is positive (greater than zero).
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Decimal methods are not const
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Decimal::is_sign_negative is not const
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Adds two money values with exact decimal arithmetic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::Money;
    ///
    /// let balance = Money::new(2500);
    /// let sum = balance.add(&Money::new(500));
    /// assert_eq!(sum.to_string(), "3000");
    /// ```
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            amount: self.amount + other.amount,
        }
    }

    /// Subtracts one money value from another with exact decimal arithmetic.
    ///
    /// The result may be negative; callers enforce their own sign policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::Money;
    ///
    /// let balance = Money::parse("1500.8989").unwrap();
    /// let difference = balance.subtract(&Money::new(500));
    /// assert_eq!(difference.to_string(), "1000.8989");
    /// ```
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self {
            amount: self.amount - other.amount,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.amount)
    }
}
