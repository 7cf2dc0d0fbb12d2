use rust_decimal::Decimal;

/// Derived presentation figures for one movement history. Recomputed from
/// scratch on every call; nothing here is cached or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Decimal,
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub interest: Decimal,
}

impl Summary {
    /// The 2-decimal form shown in the UI. Internal figures keep full
    /// precision; only this copy is rounded.
    pub fn rounded(&self) -> Summary {
        Summary {
            balance: round_display(self.balance),
            total_in: round_display(self.total_in),
            total_out: round_display(self.total_out),
            interest: round_display(self.interest),
        }
    }
}

pub fn summarize(movements: &[Decimal], interest_rate: Decimal) -> Summary {
    let balance = movements.iter().copied().sum();

    let total_in = movements
        .iter()
        .copied()
        .filter(|m| *m > Decimal::ZERO)
        .sum();

    let total_out = movements
        .iter()
        .copied()
        .filter(|m| *m < Decimal::ZERO)
        .sum::<Decimal>()
        .abs();

    // Interest accrues per deposit, and a deposit only counts when its own
    // interest reaches 1. The threshold is per item, not on the total.
    let interest = movements
        .iter()
        .copied()
        .filter(|m| *m > Decimal::ZERO)
        .map(|deposit| deposit * interest_rate / Decimal::ONE_HUNDRED)
        .filter(|per_deposit| *per_deposit >= Decimal::ONE)
        .sum();

    Summary {
        balance,
        total_in,
        total_out,
        interest,
    }
}

/// Round to the two decimal places the UI shows, keeping the scale fixed so
/// whole numbers still render as `x.00`.
pub fn round_display(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn totals_split_inflow_and_outflow() {
        let summary = summarize(&[d(200), d(-150), d(450), d(-50)], Decimal::ZERO);

        assert_eq!(summary.balance, d(450));
        assert_eq!(summary.total_in, d(650));
        assert_eq!(summary.total_out, d(200));
    }

    #[test]
    fn deposit_interest_of_at_least_one_is_included() {
        // 100 * 1.2% = 1.2 >= 1
        let summary = summarize(&[d(100)], Decimal::new(12, 1));
        assert_eq!(summary.interest, Decimal::new(12, 1));
        assert_eq!(summary.rounded().interest, Decimal::new(120, 2));
    }

    #[test]
    fn deposit_interest_below_one_is_dropped_per_item() {
        // 50 * 1.2% = 0.6 < 1
        let summary = summarize(&[d(50)], Decimal::new(12, 1));
        assert_eq!(summary.interest, Decimal::ZERO);

        // Two such deposits would total 1.2, but each is below the threshold
        // on its own.
        let summary = summarize(&[d(50), d(50)], Decimal::new(12, 1));
        assert_eq!(summary.interest, Decimal::ZERO);
    }

    #[test]
    fn withdrawals_never_accrue_interest() {
        let summary = summarize(&[d(-1000)], Decimal::new(50, 0));
        assert_eq!(summary.interest, Decimal::ZERO);
    }

    #[test]
    fn rounding_fixes_the_display_scale() {
        assert_eq!(round_display(d(11920)).to_string(), "11920.00");
        assert_eq!(round_display(Decimal::new(65099, 2)).to_string(), "650.99");
        assert_eq!(round_display(Decimal::new(2565, 1)).to_string(), "256.50");
    }
}
