//! Account entity.
//!
//! An `Account` pairs an owner name with an exact-decimal balance and is
//! mutated in place by its operations. The balance invariant is one-sided:
//! a successful debit never leaves the balance negative, while credit is
//! unbounded above.

use serde::{Deserialize, Serialize};

use super::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, BankId, Money};

// =============================================================================
// Account
// =============================================================================

/// An account with an owner, an exact-decimal balance, and an optional
/// back-reference to the bank that registered it.
///
/// Equality is value-based over `owner` and `balance` only; the generated
/// [`AccountId`] and the bank assignment never influence comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Money,
    bank_id: Option<BankId>,
}

impl Account {
    /// Creates a new account with the given owner and initial balance.
    ///
    /// The account starts unregistered (`bank_id` is `None`) and receives a
    /// freshly generated identity. The initial balance is taken as supplied;
    /// only debits enforce the non-negative invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::account::Account;
    /// use banco::domain::value_objects::Money;
    ///
    /// let account = Account::new("Miguel", Money::parse("1000.12345").unwrap());
    ///
    /// assert_eq!(account.owner(), "Miguel");
    /// assert_eq!(account.balance().to_string(), "1000.12345");
    /// assert!(account.bank_id().is_none());
    /// ```
    #[must_use]
    pub fn new(owner: impl Into<String>, balance: Money) -> Self {
        Self {
            id: AccountId::generate(),
            owner: owner.into(),
            balance,
            bank_id: None,
        }
    }

    /// Returns the account's identity.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the owner's name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the current balance, exact.
    #[must_use]
    pub const fn balance(&self) -> &Money {
        &self.balance
    }

    /// Returns the id of the bank this account is registered with, if any.
    #[must_use]
    pub const fn bank_id(&self) -> Option<BankId> {
        self.bank_id
    }

    /// Replaces the owner's name.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Replaces the balance outright, bypassing debit/credit validation.
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Records the bank this account now belongs to.
    ///
    /// Invoked by `Bank::add_account` during registration; the back-reference
    /// is an identifier only and carries no ownership.
    pub(crate) fn assign_bank(&mut self, bank_id: BankId) {
        self.bank_id = Some(bank_id);
    }

    /// Debits `amount` from the balance with exact decimal subtraction.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidAmount` if `amount` is negative.
    /// * `DomainError::InsufficientFunds` if the debit would drive the
    ///   balance below zero. The balance is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::account::Account;
    /// use banco::domain::value_objects::Money;
    ///
    /// let mut account = Account::new("Miguel", Money::new(1000));
    /// account.debit(&Money::new(100)).unwrap();
    ///
    /// assert_eq!(account.balance().to_string(), "900");
    /// ```
    pub fn debit(&mut self, amount: &Money) -> DomainResult<()> {
        validate_amount(amount)?;

        if self.balance < *amount {
            return Err(DomainError::InsufficientFunds {
                required: amount.clone(),
                available: self.balance.clone(),
            });
        }

        self.balance = self.balance.subtract(amount);
        Ok(())
    }

    /// Credits `amount` to the balance with exact decimal addition.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidAmount` if `amount` is negative. For
    ///   non-negative amounts the operation always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::account::Account;
    /// use banco::domain::value_objects::Money;
    ///
    /// let mut account = Account::new("Miguel", Money::parse("1000.12345").unwrap());
    /// account.credit(&Money::new(100)).unwrap();
    ///
    /// assert_eq!(account.balance().to_string(), "1100.12345");
    /// ```
    pub fn credit(&mut self, amount: &Money) -> DomainResult<()> {
        validate_amount(amount)?;

        self.balance = self.balance.add(amount);
        Ok(())
    }
}

/// Rejects negative operation amounts. Zero is a valid amount.
fn validate_amount(amount: &Money) -> DomainResult<()> {
    if amount.is_negative() {
        return Err(DomainError::InvalidAmount(
            "Amount cannot be negative".to_string(),
        ));
    }

    Ok(())
}

// =============================================================================
// Equality
// =============================================================================

/// Value equality over `owner` and `balance` only.
///
/// Two separately constructed accounts with the same owner and balance
/// compare equal even though their identities and bank assignments differ.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

// =============================================================================
// Tests
// =============================================================================
