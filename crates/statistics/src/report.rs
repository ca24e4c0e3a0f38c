use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::streaks::StreakSummary;

/// A comprehensive, standardized report of a journal's trading performance.
///
/// This struct is the final output of the `StatisticsEngine` and serves as
/// the data transfer object for performance results throughout the entire
/// system. Monetary values are rounded to 2 decimal places at this
/// boundary, the win rate to 1; internal computation runs at full
/// precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    // I. Trade-Level Partition
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub break_even_trades: usize,
    /// Percentage of decisive (non-breakeven) trades that won.
    pub win_rate_pct: Decimal,

    // II. Profitability
    pub net_profit: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    /// `None` encodes an unbounded profit factor: gross losses are zero
    /// while gross profits are not. `Some(0)` means no profits either.
    pub profit_factor: Option<Decimal>,
    pub average_win: Decimal,
    pub average_loss: Decimal,
    /// Average win over average loss; 0 when there are no losing trades.
    pub risk_reward_ratio: Decimal,
    pub biggest_win: Decimal,
    /// Reported as a magnitude: the absolute value of the worst net P&L.
    pub biggest_loss: Decimal,

    // III. Drawdown and Recovery
    pub peak_equity: Decimal,
    pub max_drawdown: Decimal,
    pub max_drawdown_pct: Decimal,
    pub recovery_factor: Decimal,

    // IV. Streaks
    pub trade_streaks: StreakSummary,
    pub day_streaks: StreakSummary,

    // V. Daily Distribution
    pub daily_pnl: BTreeMap<NaiveDate, Decimal>,
    pub consistency_score: Decimal,

    pub last_updated: DateTime<Utc>,
}

impl StatisticsReport {
    /// Creates a new, zeroed-out report stamped with `as_of`.
    /// This is the well-defined result for an empty trade collection.
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            break_even_trades: 0,
            win_rate_pct: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            profit_factor: Some(Decimal::ZERO),
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            risk_reward_ratio: Decimal::ZERO,
            biggest_win: Decimal::ZERO,
            biggest_loss: Decimal::ZERO,
            peak_equity: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            max_drawdown_pct: Decimal::ZERO,
            recovery_factor: Decimal::ZERO,
            trade_streaks: StreakSummary::default(),
            day_streaks: StreakSummary::default(),
            daily_pnl: BTreeMap::new(),
            consistency_score: Decimal::ZERO,
            last_updated: as_of,
        }
    }
}

impl Default for StatisticsReport {
    fn default() -> Self {
        Self::new(DateTime::UNIX_EPOCH)
    }
}
