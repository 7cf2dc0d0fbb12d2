pub mod app;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod ledger;
pub mod presenter;

pub use app::App;
pub use dlq::StdErrDLQ;
pub use domain::{
    Account, Amount, Command, Error, Pin, Rejection, SeedAccount, Summary, summarize,
};
pub use engine::Engine;
pub use ingestion::CsvReader;
pub use ledger::Ledger;
pub use presenter::TerminalPresenter;
