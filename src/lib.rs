//! Banco Sample Library
//!
//! Toy banking domain built around exact-decimal arithmetic: accounts hold a
//! `Decimal`-backed balance, and a bank moves funds between two accounts as a
//! two-leg debit/credit operation that either applies fully or not at all.
//!
//! # Architecture
//!
//! The crate is a single domain layer (there is no server, storage, or CLI
//! surface):
//!
//! - **Value Objects**: `Money`, `AccountId`, `BankId`
//! - **Account**: entity with debit/credit operations and balance validation
//! - **Bank**: aggregate holding accounts and mediating transfers
//!
//! # Example
//!
//! ```rust
//! use banco::domain::account::Account;
//! use banco::domain::bank::Bank;
//! use banco::domain::value_objects::Money;
//!
//! let mut from = Account::new("Miguel", Money::parse("1500.8989").unwrap());
//! let mut to = Account::new("John Doe", Money::new(2500));
//!
//! let bank = Bank::new("Banco del Estado");
//! bank.transfer(&mut from, &mut to, &Money::new(500)).unwrap();
//!
//! assert_eq!(from.balance().to_string(), "1000.8989");
//! assert_eq!(to.balance().to_string(), "3000");
//! ```

pub mod domain;
