//! Bank ID value object.
//!
//! A UUID v7 identifier for banks. Accounts keep an `Option<BankId>` rather
//! than a reference to the bank itself: the association is lookup-only and
//! carries no ownership, so no reference cycle can form between a bank and
//! the accounts it holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for `BankId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided string is not a valid UUID format.
    InvalidUuidFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUuidFormat(value) => {
                write!(formatter, "Invalid UUID format: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A unique identifier for a bank.
///
/// This is the value an [`Account`] stores as its back-reference when a bank
/// registers it. Renaming the bank afterwards does not invalidate the
/// association.
///
/// [`Account`]: crate::domain::account::Account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankId(Uuid);

impl BankId {
    /// Creates a new `BankId` from a string representation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUuidFormat` if the string is not a
    /// valid UUID.
    pub fn create(value: &str) -> Result<Self, ValidationError> {
        Uuid::from_str(value).map_or_else(
            |_| Err(ValidationError::InvalidUuidFormat(value.to_string())),
            |uuid| Ok(Self(uuid)),
        )
    }

    /// Generates a new `BankId` using UUID v7.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for BankId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
