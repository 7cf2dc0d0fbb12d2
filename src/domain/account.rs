use rust_decimal::Decimal;

use crate::domain::money::Pin;

/// Construction-time account data handed in by the embedding application.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub owner: String,
    pub movements: Vec<Decimal>,
    pub interest_rate: Decimal,
    pub pin: Pin,
}

/// One bank account. The movement history is append-only and its stored
/// order is chronological; every derived figure is recomputed from it.
#[derive(Debug)]
pub struct Account {
    owner: String,
    identifier: String,
    pin: Pin,
    interest_rate: Decimal,
    movements: Vec<Decimal>,
}

impl Account {
    pub(crate) fn from_seed(seed: SeedAccount, identifier: String) -> Self {
        Self {
            owner: seed.owner,
            identifier,
            pin: seed.pin,
            interest_rate: seed.interest_rate,
            movements: seed.movements,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// First token of the owner name, used for the welcome line.
    pub fn display_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn movements(&self) -> &[Decimal] {
        &self.movements
    }

    pub fn balance(&self) -> Decimal {
        self.movements.iter().copied().sum()
    }

    pub(crate) fn pin_matches(&self, pin: Pin) -> bool {
        self.pin == pin
    }

    /// The only mutation an account supports.
    pub(crate) fn record(&mut self, amount: Decimal) {
        self.movements.push(amount);
    }

    /// A loan is backed when any single past movement reaches a tenth of the
    /// requested amount.
    pub fn qualifies_for_loan(&self, amount: Decimal) -> bool {
        let threshold = amount / Decimal::TEN;
        self.movements.iter().any(|movement| *movement >= threshold)
    }

    /// Movements prepared for display, each labeled with its 1-based
    /// chronological index. Sorted mode returns a stable ascending-by-value
    /// copy; the stored history is never reordered.
    pub fn movements_view(&self, sorted: bool) -> Vec<MovementEntry> {
        let mut entries: Vec<MovementEntry> = self
            .movements
            .iter()
            .enumerate()
            .map(|(i, amount)| MovementEntry {
                index: i + 1,
                amount: *amount,
                kind: MovementKind::of(*amount),
            })
            .collect();

        if sorted {
            entries.sort_by(|a, b| a.amount.cmp(&b.amount));
        }

        entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    fn of(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MovementKind::Deposit => write!(f, "deposit"),
            MovementKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementEntry {
    pub index: usize,
    pub amount: Decimal,
    pub kind: MovementKind,
}

/// Login identifier: the lowercased first letter of every whitespace-separated
/// token of the owner name, concatenated in order. A single-token name yields
/// one initial; a name with no tokens yields the empty string, which seed
/// validation rejects.
pub fn derive_identifier(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
