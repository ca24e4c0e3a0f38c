use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of an equity-curve replay, handed to the observer callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityStep {
    /// Position of this step in the replayed sequence.
    pub index: usize,
    /// Balance after applying this step's P&L.
    pub balance: Decimal,
    /// Highest balance reached so far, including this step.
    pub peak: Decimal,
    /// Decline from the trailing peak to the current balance.
    pub drawdown: Decimal,
}

/// Totals produced by a full equity-curve replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    pub peak: Decimal,
    pub max_drawdown: Decimal,
    pub final_balance: Decimal,
    pub net_profit: Decimal,
}

/// Replays a P&L sequence as an equity curve starting from `base`.
///
/// The cumulative-P&L drawdown metrics (base 0) and the prop-firm balance
/// checks (base = account size) are the same loop; callers that need
/// per-step decisions, such as breach detection, hook in via `observer`.
pub fn walk_equity<I, F>(base: Decimal, pnls: I, mut observer: F) -> EquitySummary
where
    I: IntoIterator<Item = Decimal>,
    F: FnMut(&EquityStep),
{
    let mut balance = base;
    let mut peak = base;
    let mut max_drawdown = Decimal::ZERO;

    for (index, pnl) in pnls.into_iter().enumerate() {
        balance += pnl;
        if balance > peak {
            peak = balance;
        }
        let drawdown = peak - balance;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
        observer(&EquityStep {
            index,
            balance,
            peak,
            drawdown,
        });
    }

    EquitySummary {
        peak,
        max_drawdown,
        final_balance: balance,
        net_profit: balance - base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn drawdown_is_measured_from_the_peak() {
        // +500 -> peak 500; -800 -> balance -300, drawdown 800; +200 ->
        // balance -100, drawdown 600. The worst decline is 800.
        let summary = walk_equity(
            Decimal::ZERO,
            [dec!(500), dec!(-800), dec!(200)].into_iter(),
            |_| {},
        );
        assert_eq!(summary.peak, dec!(500));
        assert_eq!(summary.max_drawdown, dec!(800));
        assert_eq!(summary.final_balance, dec!(-100));
        assert_eq!(summary.net_profit, dec!(-100));
    }

    #[test]
    fn peak_never_falls_below_the_base() {
        let summary = walk_equity(dec!(5000), [dec!(-100), dec!(-50)].into_iter(), |_| {});
        assert_eq!(summary.peak, dec!(5000));
        assert_eq!(summary.max_drawdown, dec!(150));
        assert_eq!(summary.final_balance, dec!(4850));
        assert_eq!(summary.net_profit, dec!(-150));
    }

    #[test]
    fn observer_sees_every_step_in_order() {
        let mut seen = Vec::new();
        walk_equity(Decimal::ZERO, [dec!(10), dec!(-4)].into_iter(), |step| {
            seen.push((step.index, step.balance, step.peak, step.drawdown));
        });
        assert_eq!(
            seen,
            vec![
                (0, dec!(10), dec!(10), dec!(0)),
                (1, dec!(6), dec!(10), dec!(4)),
            ]
        );
    }

    #[test]
    fn empty_sequence_returns_the_base() {
        let summary = walk_equity(dec!(5000), std::iter::empty(), |_| {});
        assert_eq!(summary.peak, dec!(5000));
        assert_eq!(summary.max_drawdown, Decimal::ZERO);
        assert_eq!(summary.final_balance, dec!(5000));
        assert_eq!(summary.net_profit, Decimal::ZERO);
    }
}
