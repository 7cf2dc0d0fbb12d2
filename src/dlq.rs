use crate::domain::{DeadLetterQueue, Error};

/// Failed commands end up on stderr; the run itself carries on.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        eprintln!("Command rejected: {}", error);
    }
}
