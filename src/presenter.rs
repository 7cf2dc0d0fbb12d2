use crate::domain::traits::Presenter;
use crate::domain::{Account, round_display, summarize};

/// Renders sessions to stdout: a welcome line, the movement rows, the
/// balance and summary after every refresh, and a CSV-style table of all
/// accounts on flush.
#[derive(Default, Debug)]
pub struct TerminalPresenter {}

impl Presenter for TerminalPresenter {
    fn show_account(&mut self, account: &Account, sorted: bool) {
        println!("Welcome back, {}", account.display_name());

        for entry in account.movements_view(sorted) {
            println!("{} {} {}", entry.index, entry.kind, round_display(entry.amount));
        }

        let summary = summarize(account.movements(), account.interest_rate()).rounded();
        println!("balance {}", summary.balance);
        println!(
            "in {} out {} interest {}",
            summary.total_in, summary.total_out, summary.interest
        );
    }

    fn hide(&mut self) {
        println!("Logged out.");
    }

    fn flush(&mut self, accounts: &[Account]) {
        println!("identifier,owner,balance,in,out,interest");
        for account in accounts {
            let summary = summarize(account.movements(), account.interest_rate()).rounded();
            println!(
                "{},{},{},{},{},{}",
                account.identifier(),
                account.owner(),
                summary.balance,
                summary.total_in,
                summary.total_out,
                summary.interest
            );
        }
    }
}
