use crate::domain::money::{Amount, Pin};

/// One parsed user action from the command script.
#[derive(Debug, Clone)]
pub enum Command {
    Login { user: String, pin: Pin },
    Logout,
    Transfer { to: String, amount: Amount },
    Loan { amount: Amount },
    Close { user: String, pin: Pin },
    Sort,
}

// Pins are deliberately left out of the rendered form.
impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Login { user, .. } => write!(f, "login,user={}", user),
            Command::Logout => write!(f, "logout"),
            Command::Transfer { to, amount } => {
                write!(f, "transfer,to={},amount={}", to, amount.get())
            }
            Command::Loan { amount } => write!(f, "loan,amount={}", amount.get()),
            Command::Close { user, .. } => write!(f, "close,user={}", user),
            Command::Sort => write!(f, "sort"),
        }
    }
}
