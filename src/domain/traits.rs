use futures::Stream;

use crate::domain::{Account, Command, Error};

pub trait CommandStream {
    type Commands: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Commands;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

/// The rendering side of the application: shown a logged-in account after
/// every operation that changes what the user sees, told to hide when the
/// session ends, and handed the full account list once at shutdown.
pub trait Presenter {
    fn show_account(&mut self, account: &Account, sorted: bool);

    fn hide(&mut self);

    fn flush(&mut self, accounts: &[Account]);
}
