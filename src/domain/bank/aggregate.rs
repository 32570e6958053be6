//! Bank aggregate.
//!
//! A bank holds a mutable name and an insertion-ordered collection of
//! accounts. Registration moves an account into the bank and stamps the
//! account's back-reference; transfers run as a debit leg followed by a
//! credit leg, where a failed debit prevents the credit entirely.

use serde::{Deserialize, Serialize};

use crate::domain::account::aggregate::Account;
use crate::domain::account::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, BankId, Money};

// =============================================================================
// Bank
// =============================================================================

/// An aggregate holding a name and a collection of accounts, mediating
/// transfers.
///
/// Two kinds of transfer are offered: [`Bank::transfer`] works on any two
/// borrowed accounts without consulting the bank's collection, while
/// [`Bank::transfer_between`] resolves both parties in the collection and
/// fails if either is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Creates a bank with the given name and no accounts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::bank::Bank;
    ///
    /// let bank = Bank::new("Banco del Estado");
    ///
    /// assert_eq!(bank.name(), "Banco del Estado");
    /// assert!(bank.accounts().is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BankId::generate(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Returns the bank's identity.
    #[must_use]
    pub const fn id(&self) -> BankId {
        self.id
    }

    /// Returns the bank's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the bank. Existing back-references keep pointing at this bank
    /// because they hold its id, not its name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Registers an account: stamps its back-reference with this bank's id,
    /// then appends it to the collection.
    ///
    /// Registration is not deduplicated; adding equal-valued accounts twice
    /// yields two entries.
    pub fn add_account(&mut self, mut account: Account) {
        account.assign_bank(self.id);
        tracing::debug!("{}: registered account for {}", self.name, account.owner());
        self.accounts.push(account);
    }

    /// Returns the registered accounts in the order they were added.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up a registered account by id.
    #[must_use]
    pub fn find_account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    /// Looks up the first registered account whose owner matches `owner`.
    #[must_use]
    pub fn find_account_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Transfers `amount` from one account to another.
    ///
    /// Neither account needs to be registered with this bank; the operation
    /// works on the two exclusive borrows alone. On success the two-account
    /// total is conserved exactly.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidAmount` if `amount` is negative.
    /// * `DomainError::InsufficientFunds`, propagated unchanged from the
    ///   debit leg; `to` is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use banco::domain::account::Account;
    /// use banco::domain::bank::Bank;
    /// use banco::domain::value_objects::Money;
    ///
    /// let bank = Bank::new("Banco del Estado");
    /// let mut from = Account::new("Miguel", Money::parse("1500.8989").unwrap());
    /// let mut to = Account::new("John Doe", Money::new(2500));
    ///
    /// bank.transfer(&mut from, &mut to, &Money::new(500)).unwrap();
    ///
    /// assert_eq!(from.balance().to_string(), "1000.8989");
    /// assert_eq!(to.balance().to_string(), "3000");
    /// ```
    pub fn transfer(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: &Money,
    ) -> DomainResult<()> {
        match execute_transfer(from, to, amount) {
            Ok(()) => {
                tracing::debug!(
                    "{}: transferred {amount} from {} to {}",
                    self.name,
                    from.owner(),
                    to.owner()
                );
                Ok(())
            }
            Err(error) => {
                tracing::warn!("{}: transfer of {amount} failed: {error}", self.name);
                Err(error)
            }
        }
    }

    /// Transfers `amount` between two accounts registered with this bank.
    ///
    /// This is the membership-enforcing counterpart of [`Bank::transfer`]:
    /// both ids must resolve in the bank's own collection.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidAmount` if `from` and `to` are the same
    ///   account, or if `amount` is negative.
    /// * `DomainError::AccountNotFound` for the first id that does not
    ///   resolve.
    /// * `DomainError::InsufficientFunds`, propagated unchanged from the
    ///   debit leg; the receiving account is left untouched.
    pub fn transfer_between(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: &Money,
    ) -> DomainResult<()> {
        if from == to {
            return Err(DomainError::InvalidAmount(
                "Cannot transfer to the same account".to_string(),
            ));
        }

        let from_index = self
            .position_of(from)
            .ok_or(DomainError::AccountNotFound(from))?;
        let to_index = self
            .position_of(to)
            .ok_or(DomainError::AccountNotFound(to))?;

        // Distinct ids resolve to distinct positions, so the split yields
        // two disjoint exclusive borrows.
        let (from_account, to_account) = if from_index < to_index {
            let (left, right) = self.accounts.split_at_mut(to_index);
            (&mut left[from_index], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(from_index);
            (&mut right[0], &mut left[to_index])
        };

        match execute_transfer(from_account, to_account, amount) {
            Ok(()) => {
                tracing::debug!(
                    "{}: transferred {amount} from {} to {}",
                    self.name,
                    from_account.owner(),
                    to_account.owner()
                );
                Ok(())
            }
            Err(error) => {
                tracing::warn!("{}: transfer of {amount} failed: {error}", self.name);
                Err(error)
            }
        }
    }

    fn position_of(&self, id: AccountId) -> Option<usize> {
        self.accounts.iter().position(|account| account.id() == id)
    }
}

/// Runs the two transfer legs in order: debit `from`, then credit `to`.
///
/// The debit leg validates the amount and the balance, so by the time the
/// credit leg runs it cannot fail; a failed debit returns before `to` is
/// touched.
fn execute_transfer(from: &mut Account, to: &mut Account, amount: &Money) -> DomainResult<()> {
    from.debit(amount)?;
    to.credit(amount)
}

// =============================================================================
// Tests
// =============================================================================
