use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{Account, Pin, Rejection};
use crate::ledger::Ledger;

/// The authenticated account for the lifetime of one login. Created by
/// `login`, destroyed by `logout` and `close_account`; there is never more
/// than one.
#[derive(Debug)]
struct Session {
    identifier: String,
}

/// Session and transaction engine over one [`Ledger`].
///
/// Mutations require `&mut self`, which doubles as the serialization
/// boundary: an embedding that feeds the engine from several callers puts
/// one lock around the whole engine and upholds transfer atomicity and
/// identifier uniqueness with it.
#[derive(Debug)]
pub struct Engine {
    ledger: Ledger,
    session: Option<Session>,
    sorted: bool,
}

impl Engine {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            session: None,
            sorted: false,
        }
    }

    /// Authenticates and opens a session, replacing any existing one.
    pub fn login(&mut self, identifier: &str, pin: Pin) -> Option<&Account> {
        let identifier = self
            .ledger
            .authenticate(identifier, pin)?
            .identifier()
            .to_owned();

        info!(%identifier, "login");
        self.session = Some(Session { identifier });
        self.current_account()
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(identifier = %session.identifier, "logout");
        }
    }

    pub fn current_account(&self) -> Option<&Account> {
        let session = self.session.as_ref()?;
        self.ledger.find(&session.identifier)
    }

    fn session_identifier(&self) -> Result<String, Rejection> {
        self.session
            .as_ref()
            .map(|session| session.identifier.clone())
            .ok_or(Rejection::NotLoggedIn)
    }

    /// Sends `amount` from the logged-in account to `to_identifier`.
    pub fn transfer(&mut self, amount: Decimal, to_identifier: &str) -> Result<(), Rejection> {
        let from = self.session_identifier()?;
        self.ledger.transfer(&from, to_identifier, amount)?;

        info!(%from, to = %to_identifier, %amount, "transfer");
        Ok(())
    }

    /// Grants a loan to the logged-in account when some past movement backs
    /// it. The eligibility rule is deliberately the simple one the product
    /// ships with; see `Account::qualifies_for_loan`.
    pub fn request_loan(&mut self, amount: Decimal) -> Result<(), Rejection> {
        let identifier = self.session_identifier()?;

        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }

        let account = self
            .ledger
            .find_mut(&identifier)
            .ok_or(Rejection::NotLoggedIn)?;
        if !account.qualifies_for_loan(amount) {
            return Err(Rejection::LoanIneligible);
        }

        account.record(amount);
        info!(%identifier, %amount, "loan granted");
        Ok(())
    }

    /// Closes the logged-in account. Both credentials must re-match the
    /// session's own account; on success the account is removed and the
    /// session is cleared.
    pub fn close_account(&mut self, identifier: &str, pin: Pin) -> Result<(), Rejection> {
        let current = self.current_account().ok_or(Rejection::NotLoggedIn)?;
        if current.identifier() != identifier || !current.pin_matches(pin) {
            return Err(Rejection::CloseMismatch);
        }

        self.ledger.close(identifier);
        self.session = None;

        info!(%identifier, "account closed");
        Ok(())
    }

    /// Flips the presentation-only sort flag and returns the new state.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
