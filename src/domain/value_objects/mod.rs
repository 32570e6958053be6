//! Value objects for the banking domain.
//!
//! Value objects are immutable objects that have no identity. They are defined
//! only by their values and are used to describe characteristics or attributes
//! of domain entities.
//!
//! # Available Value Objects
//!
//! - [`Money`] - Exact-decimal monetary amount (no binary floating point)
//! - [`AccountId`] - Unique identifier for accounts (UUID v7)
//! - [`BankId`] - Unique identifier for banks, used as the account's
//!   back-reference target (UUID v7)
//!
//! # Design Principles
//!
//! - **Immutability**: Once created, values cannot be changed
//! - **Value equality**: Two instances with the same values are considered equal
//! - **Self-validation**: Invalid values cannot be created (smart constructors)
//! - **Side-effect free**: All operations are pure functions

mod account_id;
mod bank_id;
mod money;

pub use account_id::{AccountId, ValidationError as AccountIdValidationError};
pub use bank_id::{BankId, ValidationError as BankIdValidationError};
pub use money::{Money, MoneyError};
