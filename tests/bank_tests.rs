//! Bank behavior tests.
//!
//! Exercises registration, the bank/account relation, and both transfer
//! flavors against the literal scenario: "Banco del Estado" moving 500 from
//! Miguel (1500.8989) to John Doe (2500).

use banco::domain::account::Account;
use banco::domain::bank::Bank;
use banco::domain::value_objects::{AccountId, Money};
use rstest::{fixture, rstest};

#[fixture]
fn banco_estado() -> Bank {
    Bank::new("Banco del Estado")
}

#[fixture]
fn miguel() -> Account {
    Account::new("Miguel", Money::parse("1500.8989").unwrap())
}

#[fixture]
fn john_doe() -> Account {
    Account::new("John Doe", Money::new(2500))
}

mod transfer_tests {
    use super::*;

    #[rstest]
    fn transfer_moves_exact_amounts_between_accounts(
        banco_estado: Bank,
        mut miguel: Account,
        mut john_doe: Account,
    ) {
        banco_estado
            .transfer(&mut miguel, &mut john_doe, &Money::new(500))
            .unwrap();

        assert_eq!(miguel.balance().to_string(), "1000.8989");
        assert_eq!(john_doe.balance().to_string(), "3000");
    }

    #[rstest]
    fn transfer_works_without_registration(
        banco_estado: Bank,
        mut miguel: Account,
        mut john_doe: Account,
    ) {
        // Neither account has been added to the bank.
        let result = banco_estado.transfer(&mut miguel, &mut john_doe, &Money::new(500));

        assert!(result.is_ok());
        assert!(miguel.bank_id().is_none());
        assert!(john_doe.bank_id().is_none());
    }

    #[rstest]
    fn failed_transfer_leaves_the_receiving_account_untouched(
        banco_estado: Bank,
        mut miguel: Account,
        mut john_doe: Account,
    ) {
        let error = banco_estado
            .transfer(&mut miguel, &mut john_doe, &Money::new(2000))
            .unwrap_err();

        assert_eq!(error.to_string(), "Dinero insuficiente");
        assert_eq!(miguel.balance().to_string(), "1500.8989");
        assert_eq!(john_doe.balance().to_string(), "2500");
    }
}

mod relation_tests {
    use super::*;

    #[rstest]
    fn registration_stamps_the_bank_id(mut banco_estado: Bank, miguel: Account) {
        banco_estado.add_account(miguel);

        assert_eq!(
            banco_estado.accounts()[0].bank_id(),
            Some(banco_estado.id())
        );
    }

    #[rstest]
    fn accounts_enumerate_in_registration_order(
        mut banco_estado: Bank,
        miguel: Account,
        john_doe: Account,
    ) {
        banco_estado.add_account(john_doe);
        banco_estado.add_account(miguel);

        let owners: Vec<&str> = banco_estado
            .accounts()
            .iter()
            .map(Account::owner)
            .collect();
        assert_eq!(owners, vec!["John Doe", "Miguel"]);
    }

    #[rstest]
    fn bank_and_accounts_stay_related_through_a_transfer(
        mut banco_estado: Bank,
        miguel: Account,
        john_doe: Account,
    ) {
        // Given both accounts registered with the bank
        let from = miguel.id();
        let to = john_doe.id();
        banco_estado.add_account(john_doe);
        banco_estado.add_account(miguel);

        // When 500 moves from Miguel to John Doe
        banco_estado
            .transfer_between(from, to, &Money::new(500))
            .unwrap();

        // Then balances, count, back-references, and lookups all agree
        assert_eq!(
            banco_estado.find_account(from).unwrap().balance().to_string(),
            "1000.8989"
        );
        assert_eq!(
            banco_estado.find_account(to).unwrap().balance().to_string(),
            "3000"
        );
        assert_eq!(banco_estado.accounts().len(), 2);
        assert_eq!(
            banco_estado.accounts()[0].bank_id(),
            Some(banco_estado.id())
        );
        assert_eq!(
            banco_estado
                .find_account_by_owner("Miguel")
                .unwrap()
                .owner(),
            "Miguel"
        );
        assert!(banco_estado
            .accounts()
            .iter()
            .any(|account| account.owner() == "Miguel"));
    }
}

mod registered_transfer_tests {
    use super::*;

    #[rstest]
    fn unknown_account_ids_are_rejected(mut banco_estado: Bank, miguel: Account) {
        let from = miguel.id();
        banco_estado.add_account(miguel);
        let unknown = AccountId::generate();

        let error = banco_estado
            .transfer_between(from, unknown, &Money::new(100))
            .unwrap_err();

        assert_eq!(error.to_string(), format!("Account not found: {unknown}"));
    }

    #[rstest]
    fn insufficient_funds_propagates_and_mutates_nothing(
        mut banco_estado: Bank,
        miguel: Account,
        john_doe: Account,
    ) {
        let from = miguel.id();
        let to = john_doe.id();
        banco_estado.add_account(miguel);
        banco_estado.add_account(john_doe);

        let error = banco_estado
            .transfer_between(from, to, &Money::new(5000))
            .unwrap_err();

        assert_eq!(error.to_string(), "Dinero insuficiente");
        assert_eq!(
            banco_estado.find_account(from).unwrap().balance().to_string(),
            "1500.8989"
        );
        assert_eq!(
            banco_estado.find_account(to).unwrap().balance().to_string(),
            "2500"
        );
    }
}
