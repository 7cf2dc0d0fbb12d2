use futures::StreamExt;
use tracing::debug;

use crate::domain::{Command, CommandStream, DeadLetterQueue, Error, Presenter, Rejection};
use crate::engine::Engine;

/// Drives the engine from a command stream, playing the role of the UI's
/// event handlers. Every failed command, whether a malformed row or a
/// rejected operation, goes to the dead-letter queue and the run carries on
/// with the next one.
#[derive(Debug)]
pub struct App<I, P, D>
where
    I: CommandStream,
    P: Presenter,
    D: DeadLetterQueue,
{
    ingestion: I,
    presenter: P,
    dlq: D,
    engine: Engine,
}

impl<I, P, D> App<I, P, D>
where
    I: CommandStream,
    P: Presenter,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, presenter: P, dlq: D, engine: Engine) -> Self {
        Self {
            ingestion,
            presenter,
            dlq,
            engine,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut commands = self.ingestion.stream();

        while let Some(command) = commands.next().await {
            match command {
                Ok(command) => match self.apply(command) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<(), Error> {
        debug!(%command, "applying");

        match command {
            Command::Login { user, pin } => {
                if self.engine.login(&user, pin).is_none() {
                    return Err(Rejection::InvalidCredentials.into());
                }
                self.refresh();
            }
            Command::Logout => {
                self.engine.logout();
                self.presenter.hide();
            }
            Command::Transfer { to, amount } => {
                self.engine.transfer(amount.get(), &to)?;
                self.refresh();
            }
            Command::Loan { amount } => {
                self.engine.request_loan(amount.get())?;
                self.refresh();
            }
            Command::Close { user, pin } => {
                self.engine.close_account(&user, pin)?;
                self.presenter.hide();
            }
            Command::Sort => {
                self.engine.toggle_sort();
                self.refresh();
            }
        }

        Ok(())
    }

    fn refresh(&mut self) {
        if let Some(account) = self.engine.current_account() {
            self.presenter.show_account(account, self.engine.is_sorted());
        }
    }

    pub fn flush(&mut self) {
        self.presenter.flush(self.engine.ledger().accounts());
    }
}
