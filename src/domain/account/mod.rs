//! Account entity and related types.
//!
//! # Structure
//!
//! - [`aggregate`] - The `Account` entity: owner, exact-decimal balance,
//!   optional bank back-reference
//! - [`errors`] - Domain errors and the `DomainResult` alias
//!
//! # Examples
//!
//! ## Debiting an Account
//!
//! ```rust
//! use banco::domain::account::Account;
//! use banco::domain::value_objects::Money;
//!
//! let mut account = Account::new("Miguel", Money::parse("1000.12345").unwrap());
//! account.debit(&Money::new(100)).unwrap();
//!
//! assert_eq!(account.balance().to_string(), "900.12345");
//! ```
//!
//! ## Insufficient Funds
//!
//! A debit that would drive the balance negative fails without touching the
//! balance, and the error displays a fixed message:
//!
//! ```rust
//! use banco::domain::account::Account;
//! use banco::domain::value_objects::Money;
//!
//! let mut account = Account::new("Miguel", Money::parse("1000.12345").unwrap());
//! let error = account.debit(&Money::new(1500)).unwrap_err();
//!
//! assert_eq!(error.to_string(), "Dinero insuficiente");
//! assert_eq!(account.balance().to_string(), "1000.12345");
//! ```

pub mod aggregate;
pub mod errors;

pub use aggregate::*;
pub use errors::*;
