//! Domain errors for account operations.
//!
//! This module defines domain-specific errors that can occur during account
//! and transfer operations. All errors are plain algebraic data types
//! propagated through `Result`.
//!
//! # Examples
//!
//! ```rust
//! use banco::domain::account::errors::{DomainError, DomainResult};
//! use banco::domain::value_objects::Money;
//!
//! fn check_balance(available: &Money, required: &Money) -> DomainResult<()> {
//!     if available >= required {
//!         Ok(())
//!     } else {
//!         Err(DomainError::InsufficientFunds {
//!             required: required.clone(),
//!             available: available.clone(),
//!         })
//!     }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccountId, Money};

/// Domain errors that can occur during account operations.
///
/// Each variant carries context relevant to the error, enabling detailed
/// diagnostics and appropriate error handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// The account id did not resolve to a registered account.
    AccountNotFound(AccountId),

    /// A debit would drive the account balance below zero.
    ///
    /// The `Display` text is the fixed literal `"Dinero insuficiente"`;
    /// `required` and `available` are diagnostic context only.
    InsufficientFunds {
        /// The amount the debit asked for.
        required: Money,
        /// The balance available at the time of the debit.
        available: Money,
    },

    /// The provided amount is invalid for the operation.
    InvalidAmount(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountNotFound(account_id) => {
                write!(formatter, "Account not found: {account_id}")
            }
            Self::InsufficientFunds { .. } => {
                write!(formatter, "Dinero insuficiente")
            }
            Self::InvalidAmount(reason) => {
                write!(formatter, "Invalid amount: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// A type alias for domain operation results.
pub type DomainResult<T> = Result<T, DomainError>;
