use chrono::{DateTime, Utc};
use core_types::{TradeOutcome, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::consistency;
use crate::daily;
use crate::equity;
use crate::report::StatisticsReport;
use crate::streaks;

/// When the equity curve never draws down but the account is profitable,
/// the recovery factor is reported as this fixed ceiling instead of
/// dividing by zero.
const RECOVERY_FACTOR_CEILING: Decimal = dec!(5);

/// A stateless calculator for deriving performance metrics from a
/// collection of closed trades.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the full statistics report.
    ///
    /// # Arguments
    ///
    /// * `trades` - The journal's closed trades, in any order. A
    ///   chronologically sorted view is built internally where ordering
    ///   matters (streaks, drawdown); the sort is stable, so
    ///   same-timestamp trades keep their input order.
    /// * `as_of` - Stamped into the report unchanged, keeping the
    ///   calculation a pure function of its arguments.
    pub fn calculate(&self, trades: &[TradeRecord], as_of: DateTime<Utc>) -> StatisticsReport {
        let mut report = StatisticsReport::new(as_of);
        if trades.is_empty() {
            return report;
        }
        tracing::debug!(trades = trades.len(), "calculating statistics report");

        let mut ordered: Vec<&TradeRecord> = trades.iter().collect();
        ordered.sort_by_key(|t| t.entry_date);
        let net_pnls: Vec<Decimal> = ordered.iter().map(|t| t.net_pnl()).collect();

        self.calculate_aggregates(&net_pnls, &mut report);
        self.calculate_drawdown(&net_pnls, &mut report);

        report.trade_streaks = streaks::scan(net_pnls.iter().copied());
        report.daily_pnl = daily::daily_net_pnl(trades);
        report.day_streaks = streaks::scan(report.daily_pnl.values().copied());
        report.consistency_score =
            consistency::consistency_score(&report.daily_pnl, report.net_profit);

        self.round_boundary(&mut report);
        report
    }

    /// Partitions trades by outcome and derives the ratio metrics.
    fn calculate_aggregates(&self, net_pnls: &[Decimal], report: &mut StatisticsReport) {
        report.total_trades = net_pnls.len();

        for &pnl in net_pnls {
            report.net_profit += pnl;
            match TradeOutcome::from_net_pnl(pnl) {
                TradeOutcome::Win => {
                    report.winning_trades += 1;
                    report.gross_profit += pnl;
                    report.biggest_win = report.biggest_win.max(pnl);
                }
                TradeOutcome::Loss => {
                    report.losing_trades += 1;
                    report.gross_loss += pnl.abs();
                    report.biggest_loss = report.biggest_loss.max(pnl.abs());
                }
                TradeOutcome::Breakeven => {
                    report.break_even_trades += 1;
                }
            }
        }

        // Breakeven trades are excluded from the win-rate denominator: a
        // scratch is neither evidence for nor against the trader.
        let decisive = report.winning_trades + report.losing_trades;
        if decisive > 0 {
            report.win_rate_pct =
                Decimal::from(report.winning_trades) / Decimal::from(decisive) * dec!(100);
        }

        report.profit_factor = if report.gross_loss > Decimal::ZERO {
            Some(report.gross_profit / report.gross_loss)
        } else if report.gross_profit > Decimal::ZERO {
            // No losses at all: the ratio is unbounded.
            None
        } else {
            Some(Decimal::ZERO)
        };

        if report.winning_trades > 0 {
            report.average_win = report.gross_profit / Decimal::from(report.winning_trades);
        }
        if report.losing_trades > 0 {
            report.average_loss = report.gross_loss / Decimal::from(report.losing_trades);
        }
        if report.average_loss > Decimal::ZERO {
            report.risk_reward_ratio = report.average_win / report.average_loss;
        }
    }

    /// Replays the cumulative P&L curve for peak/drawdown/recovery metrics.
    fn calculate_drawdown(&self, net_pnls: &[Decimal], report: &mut StatisticsReport) {
        let summary = equity::walk_equity(Decimal::ZERO, net_pnls.iter().copied(), |_| {});

        report.peak_equity = summary.peak;
        report.max_drawdown = summary.max_drawdown;
        report.max_drawdown_pct = if summary.peak > Decimal::ZERO {
            summary.max_drawdown / summary.peak * dec!(100)
        } else {
            Decimal::ZERO
        };
        report.recovery_factor = if summary.max_drawdown > Decimal::ZERO {
            summary.net_profit / summary.max_drawdown
        } else if summary.net_profit > Decimal::ZERO {
            RECOVERY_FACTOR_CEILING
        } else {
            Decimal::ZERO
        };
    }

    /// Rounds the outward-facing values; everything upstream of this point
    /// runs at full precision.
    fn round_boundary(&self, report: &mut StatisticsReport) {
        report.win_rate_pct = report.win_rate_pct.round_dp(1);
        report.net_profit = report.net_profit.round_dp(2);
        report.gross_profit = report.gross_profit.round_dp(2);
        report.gross_loss = report.gross_loss.round_dp(2);
        report.profit_factor = report.profit_factor.map(|pf| pf.round_dp(2));
        report.average_win = report.average_win.round_dp(2);
        report.average_loss = report.average_loss.round_dp(2);
        report.risk_reward_ratio = report.risk_reward_ratio.round_dp(2);
        report.biggest_win = report.biggest_win.round_dp(2);
        report.biggest_loss = report.biggest_loss.round_dp(2);
        report.peak_equity = report.peak_equity.round_dp(2);
        report.max_drawdown = report.max_drawdown.round_dp(2);
        report.max_drawdown_pct = report.max_drawdown_pct.round_dp(2);
        report.recovery_factor = report.recovery_factor.round_dp(2);
        report.consistency_score = report.consistency_score.round_dp(2);
        for pnl in report.daily_pnl.values_mut() {
            *pnl = pnl.round_dp(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaks::StreakSummary;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn engine() -> StatisticsEngine {
        StatisticsEngine::new()
    }

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    /// One trade per day, starting 2025-01-06, net P&L = `pnl` (no costs).
    fn daily_trades(pnls: &[i64]) -> Vec<TradeRecord> {
        pnls.iter()
            .enumerate()
            .map(|(i, pnl)| {
                let entry = Utc.with_ymd_and_hms(2025, 1, 6, 14, 30, 0).unwrap()
                    + chrono::Duration::days(i as i64);
                TradeRecord::new(Decimal::from(*pnl), Decimal::ZERO, entry)
            })
            .collect()
    }

    #[test]
    fn mixed_book_aggregates() {
        let trades = daily_trades(&[100, 50, -30, 20, -10, -10]);
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.total_trades, 6);
        assert_eq!(report.winning_trades, 3);
        assert_eq!(report.losing_trades, 3);
        assert_eq!(report.break_even_trades, 0);
        assert_eq!(report.win_rate_pct, dec!(50.0));
        assert_eq!(report.gross_profit, dec!(170));
        assert_eq!(report.gross_loss, dec!(50));
        assert_eq!(report.profit_factor, Some(dec!(3.4)));
        assert_eq!(report.average_win, dec!(56.67));
        assert_eq!(report.average_loss, dec!(16.67));
        assert_eq!(report.risk_reward_ratio, dec!(3.4));
        assert_eq!(report.biggest_win, dec!(100));
        assert_eq!(report.biggest_loss, dec!(30));
        assert_eq!(report.net_profit, dec!(120));
    }

    #[test]
    fn all_winners_have_unbounded_profit_factor() {
        let trades = daily_trades(&[10, 10, 10]);
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.profit_factor, None);
        assert_eq!(report.average_loss, Decimal::ZERO);
        assert_eq!(report.risk_reward_ratio, Decimal::ZERO);
        assert_eq!(report.recovery_factor, dec!(5));
    }

    #[test]
    fn empty_journal_is_all_zero() {
        let report = engine().calculate(&[], as_of());

        assert_eq!(report.total_trades, 0);
        assert_eq!(report.win_rate_pct, Decimal::ZERO);
        assert_eq!(report.profit_factor, Some(Decimal::ZERO));
        assert_eq!(report.max_drawdown, Decimal::ZERO);
        assert_eq!(report.consistency_score, Decimal::ZERO);
        assert_eq!(report.trade_streaks, StreakSummary::default());
        assert!(report.daily_pnl.is_empty());
        assert_eq!(report.last_updated, as_of());
    }

    #[test]
    fn drawdown_scenario_from_peak() {
        let trades = daily_trades(&[500, -800, 200]);
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.peak_equity, dec!(500));
        assert_eq!(report.max_drawdown, dec!(800));
        assert_eq!(report.max_drawdown_pct, dec!(160.00));
        // Net loss with a drawdown: the recovery factor goes negative.
        // -100 / 800 = -0.125, which banker's rounding takes to -0.12.
        assert_eq!(report.recovery_factor, dec!(-0.12));
    }

    #[test]
    fn unordered_input_is_sorted_before_streaks() {
        let mut trades = daily_trades(&[10, 10, -5]);
        trades.reverse();
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.trade_streaks.best_win, 2);
        assert_eq!(report.trade_streaks.current, -1);
    }

    #[test]
    fn breakeven_trades_do_not_move_the_win_rate() {
        let decisive = daily_trades(&[100, -50]);
        let with_scratches = daily_trades(&[100, -50, 0, 0, 0]);
        let base = engine().calculate(&decisive, as_of());
        let padded = engine().calculate(&with_scratches, as_of());

        assert_eq!(base.win_rate_pct, dec!(50.0));
        assert_eq!(padded.win_rate_pct, dec!(50.0));
        assert_eq!(padded.break_even_trades, 3);
    }

    #[test]
    fn day_streaks_group_same_day_trades() {
        // Two trades on one day netting a loss, then two winning days.
        let base = Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).unwrap();
        let trades = vec![
            TradeRecord::new(dec!(40), Decimal::ZERO, base),
            TradeRecord::new(dec!(-90), Decimal::ZERO, base + chrono::Duration::hours(3)),
            TradeRecord::new(dec!(30), Decimal::ZERO, base + chrono::Duration::days(1)),
            TradeRecord::new(dec!(20), Decimal::ZERO, base + chrono::Duration::days(2)),
        ];
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.day_streaks.current, 2);
        assert_eq!(report.day_streaks.worst_loss, -1);
        assert_eq!(report.trade_streaks.best_win, 2);
    }

    #[test]
    fn commission_is_a_cost() {
        let entry = Utc.with_ymd_and_hms(2025, 4, 7, 10, 0, 0).unwrap();
        let trades = vec![TradeRecord::new(dec!(100), dec!(4.50), entry)];
        let report = engine().calculate(&trades, as_of());

        assert_eq!(report.net_profit, dec!(95.50));
        assert_eq!(report.gross_profit, dec!(95.50));
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let trades = daily_trades(&[100, -20, 0, 35, -80]);
        let stamp = as_of();
        assert_eq!(
            engine().calculate(&trades, stamp),
            engine().calculate(&trades, stamp)
        );
    }

    prop_compose! {
        fn arb_trade()(
            pnl_cents in -1_000_000i64..1_000_000,
            commission_cents in 0i64..10_000,
            offset_minutes in 0i64..1_000_000,
        ) -> TradeRecord {
            TradeRecord::new(
                Decimal::new(pnl_cents, 2),
                Decimal::new(commission_cents, 2),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::minutes(offset_minutes),
            )
        }
    }

    proptest! {
        #[test]
        fn outcome_counts_partition_the_total(trades in prop::collection::vec(arb_trade(), 0..60)) {
            let report = engine().calculate(&trades, as_of());
            prop_assert_eq!(
                report.winning_trades + report.losing_trades + report.break_even_trades,
                report.total_trades
            );
        }

        #[test]
        fn profit_factor_sign_rules_hold(trades in prop::collection::vec(arb_trade(), 0..60)) {
            let report = engine().calculate(&trades, as_of());
            match report.profit_factor {
                Some(pf) => prop_assert!(pf >= Decimal::ZERO),
                None => prop_assert!(
                    report.gross_loss == Decimal::ZERO && report.gross_profit > Decimal::ZERO
                ),
            }
        }

        #[test]
        fn streak_bounds_hold(trades in prop::collection::vec(arb_trade(), 0..60)) {
            let report = engine().calculate(&trades, as_of());
            for streaks in [report.trade_streaks, report.day_streaks] {
                prop_assert!(streaks.best_win >= 0);
                prop_assert!(streaks.worst_loss <= 0);
                prop_assert!(streaks.current <= streaks.best_win);
                prop_assert!(streaks.current >= streaks.worst_loss);
            }
        }

        #[test]
        fn consistency_is_zero_for_losing_accounts(trades in prop::collection::vec(arb_trade(), 1..60)) {
            let report = engine().calculate(&trades, as_of());
            if report.net_profit < Decimal::ZERO {
                prop_assert_eq!(report.consistency_score, Decimal::ZERO);
            }
        }

        #[test]
        fn drawdown_and_peak_are_never_negative(trades in prop::collection::vec(arb_trade(), 0..60)) {
            let report = engine().calculate(&trades, as_of());
            prop_assert!(report.max_drawdown >= Decimal::ZERO);
            prop_assert!(report.peak_equity >= Decimal::ZERO);
        }
    }
}
