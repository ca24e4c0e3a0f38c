use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Consecutive win/loss runs over a P&L sequence.
///
/// `current` is signed: positive while on a winning run, negative while on
/// a losing run. `best_win` and `worst_loss` are the extremes observed
/// anywhere in the sequence, so `best_win >= 0` and `worst_loss <= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: i32,
    pub best_win: i32,
    pub worst_loss: i32,
}

/// Scans a chronologically ordered P&L sequence and tracks streaks.
///
/// A breakeven entry (exactly zero P&L) is a non-event: it neither extends
/// nor breaks the running streak.
pub fn scan<I>(pnls: I) -> StreakSummary
where
    I: IntoIterator<Item = Decimal>,
{
    let mut streak = StreakSummary::default();
    for pnl in pnls {
        if pnl > Decimal::ZERO {
            streak.current = if streak.current >= 0 {
                streak.current + 1
            } else {
                1
            };
        } else if pnl < Decimal::ZERO {
            streak.current = if streak.current <= 0 {
                streak.current - 1
            } else {
                -1
            };
        } else {
            continue;
        }
        streak.best_win = streak.best_win.max(streak.current);
        streak.worst_loss = streak.worst_loss.min(streak.current);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn run(values: &[i64]) -> StreakSummary {
        scan(values.iter().map(|v| Decimal::from(*v)))
    }

    #[test]
    fn empty_sequence_is_all_zero() {
        assert_eq!(run(&[]), StreakSummary::default());
    }

    #[test]
    fn tracks_sign_flips() {
        // W W W L L W L W W
        let streak = run(&[10, 10, 10, -5, -5, 10, -5, 10, 10]);
        assert_eq!(streak.best_win, 3);
        assert_eq!(streak.worst_loss, -2);
        assert_eq!(streak.current, 2);
    }

    #[test]
    fn loss_after_wins_resets_to_minus_one() {
        let streak = run(&[10, 10, -5]);
        assert_eq!(streak.current, -1);
        assert_eq!(streak.best_win, 2);
    }

    #[test]
    fn breakeven_neither_breaks_nor_extends() {
        let with_breakeven = scan([dec!(10), dec!(0), dec!(10)].into_iter());
        assert_eq!(with_breakeven.current, 2);
        assert_eq!(with_breakeven.best_win, 2);

        let only_breakeven = scan([dec!(0), dec!(0)].into_iter());
        assert_eq!(only_breakeven, StreakSummary::default());
    }

    #[test]
    fn all_losses_accumulate_negatively() {
        let streak = run(&[-1, -1, -1, -1]);
        assert_eq!(streak.current, -4);
        assert_eq!(streak.worst_loss, -4);
        assert_eq!(streak.best_win, 0);
    }
}
