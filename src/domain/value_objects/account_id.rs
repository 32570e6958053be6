//! Account ID value object.
//!
//! Provides a strongly-typed identifier for accounts using UUID v7 format.
//! UUID v7 is time-ordered, so identifiers sort in generation order, which
//! gives accounts a stable identity that is independent of their value
//! equality (owner and balance).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for `AccountId`.
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

/// A unique identifier for an account.
///
/// Two accounts with the same owner and balance still carry distinct
/// `AccountId`s; identity and value equality are deliberately separate
/// concepts in this domain.
///
/// # Examples
///
/// ```rust
/// use banco::domain::value_objects::AccountId;
///
/// // Generate a new account ID
/// let id = AccountId::generate();
///
/// // Reconstruct one from a string (validated)
/// let parsed = AccountId::create(&id.to_string()).unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new `AccountId` from a string representation.
    ///
    /// This is a smart constructor that validates the input is a well-formed
    /// UUID before wrapping it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUuidFormat` if the string is not a
    /// valid UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::value_objects::AccountId;
    ///
    /// let valid = AccountId::create("01234567-89ab-cdef-0123-456789abcdef");
    /// assert!(valid.is_ok());
    ///
    /// let invalid = AccountId::create("not-a-uuid");
    /// assert!(invalid.is_err());
    /// ```
    pub fn create(value: &str) -> Result<Self, ValidationError> {
        Uuid::from_str(value).map_or_else(
            |_| Err(ValidationError::InvalidUuidFormat(value.to_string())),
            |uuid| Ok(Self(uuid)),
        )
    }

    /// Generates a new `AccountId` using UUID v7.
    ///
    /// UUID v7 embeds a timestamp, so identifiers generated later sort after
    /// identifiers generated earlier.
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

impl fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for AccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // AccountId::create Tests
    // =========================================================================

    #[rstest]
    fn create_with_valid_uuid_returns_ok() {
        let valid_uuid = "01234567-89ab-cdef-0123-456789abcdef";
        let result = AccountId::create(valid_uuid);

        assert!(result.is_ok());
        let account_id = result.unwrap();
        assert_eq!(account_id.to_string(), valid_uuid);
    }

    #[rstest]
    #[case("not-a-valid-uuid")]
    #[case("")]
    #[case("01234567-89ab-cdef-0123")]
    fn create_with_invalid_input_returns_err(#[case] input: &str) {
        let result = AccountId::create(input);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error, ValidationError::InvalidUuidFormat(input.to_string()));
    }

    // =========================================================================
    // AccountId::generate Tests
    // =========================================================================

    #[rstest]
    fn generate_returns_unique_ids() {
        let id1 = AccountId::generate();
        let id2 = AccountId::generate();

        assert_ne!(id1, id2);
    }

    #[rstest]
    fn generate_produces_v7_uuid() {
        let id = AccountId::generate();

        assert_eq!(id.as_uuid().get_version_num(), 7);
    }

    #[rstest]
    fn generated_ids_are_time_ordered() {
        let id1 = AccountId::generate();
        let id2 = AccountId::generate();

        assert!(id1 <= id2);
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn display_formats_as_uuid_string() {
        let uuid_str = "01234567-89ab-cdef-0123-456789abcdef";
        let account_id = AccountId::create(uuid_str).unwrap();

        assert_eq!(format!("{account_id}"), uuid_str);
    }

    // =========================================================================
    // ValidationError Tests
    // =========================================================================

    #[rstest]
    fn validation_error_display() {
        let error = ValidationError::InvalidUuidFormat("bad-uuid".to_string());

        assert_eq!(format!("{error}"), "Invalid UUID format: bad-uuid");
    }

    // =========================================================================
    // From<Uuid> Tests
    // =========================================================================

    #[rstest]
    fn from_uuid_creates_account_id() {
        let uuid = Uuid::now_v7();
        let account_id: AccountId = uuid.into();

        assert_eq!(*account_id.as_uuid(), uuid);
    }

    // =========================================================================
    // Serialization Tests
    // =========================================================================

    #[rstest]
    fn serialize_deserialize_roundtrip() {
        let original = AccountId::generate();
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: AccountId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(original, deserialized);
    }

    #[rstest]
    fn serializes_as_uuid_string() {
        let uuid_str = "01234567-89ab-cdef-0123-456789abcdef";
        let account_id = AccountId::create(uuid_str).unwrap();
        let serialized = serde_json::to_string(&account_id).unwrap();

        assert_eq!(serialized, format!("\"{uuid_str}\""));
    }
}
