pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod summary;
pub mod traits;

pub use account::{Account, MovementEntry, MovementKind, SeedAccount, derive_identifier};
pub use command::Command;
pub use error::{Error, Rejection};
pub use money::{Amount, Pin};
pub use summary::{Summary, round_display, summarize};
pub use traits::{CommandStream, DeadLetterQueue, Presenter};
