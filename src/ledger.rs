use rust_decimal::Decimal;

use crate::domain::{Account, Error, Pin, Rejection, SeedAccount, derive_identifier};

/// The collection of live accounts, unique by login identifier. Populated
/// once from seed data; accounts are removed on close but never added at
/// runtime.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    /// Derives each account's identifier and validates the seed as a whole.
    /// Bad seed data is a configuration error, so construction fails fast
    /// instead of deferring to runtime.
    pub fn from_seed(seed: Vec<SeedAccount>) -> Result<Self, Error> {
        let mut accounts: Vec<Account> = Vec::with_capacity(seed.len());

        for entry in seed {
            let identifier = derive_identifier(&entry.owner);

            if identifier.is_empty() {
                return Err(Error::Seed(format!(
                    "owner {:?} yields an empty login identifier",
                    entry.owner
                )));
            }
            if entry.interest_rate < Decimal::ZERO {
                return Err(Error::Seed(format!(
                    "negative interest rate for {:?}",
                    entry.owner
                )));
            }
            if accounts.iter().any(|a| a.identifier() == identifier) {
                return Err(Error::Seed(format!(
                    "duplicate login identifier '{}'",
                    identifier
                )));
            }

            accounts.push(Account::from_seed(entry, identifier));
        }

        Ok(Self { accounts })
    }

    pub fn find(&self, identifier: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.identifier() == identifier)
    }

    pub(crate) fn find_mut(&mut self, identifier: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.identifier() == identifier)
    }

    fn index_of(&self, identifier: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.identifier() == identifier)
    }

    /// `Some` only when both the identifier and the pin match. There is a
    /// single failure shape: the caller cannot tell which of the two was
    /// wrong.
    pub fn authenticate(&self, identifier: &str, pin: Pin) -> Option<&Account> {
        self.find(identifier).filter(|account| account.pin_matches(pin))
    }

    pub fn close(&mut self, identifier: &str) -> bool {
        match self.index_of(identifier) {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves `amount` between two accounts as one unit: every precondition
    /// is checked before the first append, and the two appends cannot fail,
    /// so a transfer is never half-applied.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), Rejection> {
        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }

        let to_index = self
            .index_of(to)
            .ok_or_else(|| Rejection::UnknownRecipient(to.to_owned()))?;
        let from_index = self
            .index_of(from)
            .ok_or_else(|| Rejection::UnknownRecipient(from.to_owned()))?;

        if from_index == to_index {
            return Err(Rejection::SelfTransfer);
        }
        if self.accounts[from_index].balance() < amount {
            return Err(Rejection::InsufficientFunds);
        }

        self.accounts[from_index].record(-amount);
        self.accounts[to_index].record(amount);

        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
