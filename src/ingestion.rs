use std::io::Read;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::CommandStream;
use crate::domain::{Amount, Command, Error, Pin};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    user: Option<String>,
    pin: Option<Pin>,
    to: Option<String>,
    amount: Option<Amount>,
}

fn missing(action: &str, field: &str) -> Error {
    Error::Ingestion(format!("'{}' requires a '{}' field", action, field))
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let command = match row.action.trim().to_ascii_lowercase().as_str() {
            "login" => Command::Login {
                user: row.user.ok_or_else(|| missing("login", "user"))?,
                pin: row.pin.ok_or_else(|| missing("login", "pin"))?,
            },
            "logout" => Command::Logout,
            "transfer" => Command::Transfer {
                to: row.to.ok_or_else(|| missing("transfer", "to"))?,
                amount: row.amount.ok_or_else(|| missing("transfer", "amount"))?,
            },
            "loan" => Command::Loan {
                amount: row.amount.ok_or_else(|| missing("loan", "amount"))?,
            },
            "close" => Command::Close {
                user: row.user.ok_or_else(|| missing("close", "user"))?,
                pin: row.pin.ok_or_else(|| missing("close", "pin"))?,
            },
            "sort" => Command::Sort,
            other => {
                return Err(Error::Ingestion(format!("Invalid action: {}", other)));
            }
        };

        Ok(command)
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type Commands = std::pin::Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::Commands {
        // Take ownership of the reader so the iterator we build owns all data
        // and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
