#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// A business-rule refusal. Operations that hit one of these leave every
/// account untouched; the caller decides whether and how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no account is logged in")]
    NotLoggedIn,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("unknown recipient '{0}'")]
    UnknownRecipient(String),

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("cannot transfer to the sending account")]
    SelfTransfer,

    #[error("no past movement is large enough to back the requested loan")]
    LoanIneligible,

    #[error("confirmation does not match the logged-in account")]
    CloseMismatch,
}
