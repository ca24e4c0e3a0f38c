use chrono::NaiveDate;
use configuration::PhaseRules;
use core_types::{DrawdownMode, PhaseKind, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use statistics::{daily_net_pnl, walk_equity};

use crate::error::PropFirmError;
use crate::evaluation::{Breach, BreachKind, PhaseEvaluation, PhaseStatus};

/// Replays an account's closed trades against one phase's rules.
///
/// The evaluator holds the validated rule set and the program's account
/// size; it carries no state between evaluations.
#[derive(Debug, Clone)]
pub struct PhaseEvaluator {
    account_size: Decimal,
    rules: PhaseRules,
}

impl PhaseEvaluator {
    /// Creates a new `PhaseEvaluator`, validating that the configured
    /// rules are logical.
    pub fn new(account_size: Decimal, rules: PhaseRules) -> Result<Self, PropFirmError> {
        if account_size <= Decimal::ZERO {
            return Err(PropFirmError::InvalidRules(
                "account_size must be greater than 0".to_string(),
            ));
        }
        if rules.daily_drawdown_pct <= dec!(0) || rules.daily_drawdown_pct >= dec!(1) {
            return Err(PropFirmError::InvalidRules(
                "daily_drawdown_pct must be between 0 and 1".to_string(),
            ));
        }
        if rules.max_drawdown_pct <= dec!(0) || rules.max_drawdown_pct >= dec!(1) {
            return Err(PropFirmError::InvalidRules(
                "max_drawdown_pct must be between 0 and 1".to_string(),
            ));
        }
        if let Some(target) = rules.profit_target_pct {
            if target <= dec!(0) {
                return Err(PropFirmError::InvalidRules(
                    "profit_target_pct must be greater than 0".to_string(),
                ));
            }
        }
        Ok(Self {
            account_size,
            rules,
        })
    }

    /// Evaluates the account against this phase.
    ///
    /// Trades may arrive in any order; a chronologically sorted view is
    /// replayed. A breach fails the phase at the first violated limit; a
    /// phase with a profit target passes once the target and the
    /// minimum-trading-days requirement are both met.
    pub fn evaluate(&self, trades: &[TradeRecord]) -> PhaseEvaluation {
        let daily_limit = self.account_size * self.rules.daily_drawdown_pct;
        let max_limit = self.account_size * self.rules.max_drawdown_pct;

        let mut ordered: Vec<&TradeRecord> = trades.iter().collect();
        ordered.sort_by_key(|t| t.entry_date);
        let dates: Vec<NaiveDate> = ordered.iter().map(|t| t.trading_day()).collect();
        let net_pnls: Vec<Decimal> = ordered.iter().map(|t| t.net_pnl()).collect();

        // --- 1. Max-drawdown check, trade by trade ---
        // The balance replay is the statistics equity walker with the
        // account size as its base; only the drawdown anchor differs
        // between the two modes.
        let mode = self.rules.drawdown_mode;
        let base = self.account_size;
        let mut max_drawdown_used = Decimal::ZERO;
        let mut max_dd_breach: Option<(usize, Decimal)> = None;
        let summary = walk_equity(base, net_pnls.iter().copied(), |step| {
            let drawdown = match mode {
                DrawdownMode::Static => base - step.balance,
                DrawdownMode::Trailing => step.drawdown,
            };
            if drawdown > max_drawdown_used {
                max_drawdown_used = drawdown;
            }
            if max_dd_breach.is_none() && drawdown > max_limit {
                max_dd_breach = Some((step.index, drawdown));
            }
        });

        // --- 2. Daily-loss check, day by day ---
        // Each day's loss is anchored at that day's opening balance, so a
        // day breaches on its own summed net P&L alone.
        let days = daily_net_pnl(trades);
        let mut daily_breach: Option<(NaiveDate, Decimal)> = None;
        for (date, day_pnl) in &days {
            if *day_pnl < Decimal::ZERO && day_pnl.abs() > daily_limit {
                daily_breach = Some((*date, day_pnl.abs()));
                break;
            }
        }

        // --- 3. First breach wins ---
        // On the same date, the trade-level balance breach precedes the
        // day-close check.
        let breach = match (max_dd_breach, daily_breach) {
            (Some((index, loss)), Some((daily_date, daily_loss))) => {
                if dates[index] <= daily_date {
                    Some(Breach {
                        kind: BreachKind::MaxDrawdown,
                        date: dates[index],
                        loss,
                        limit: max_limit,
                    })
                } else {
                    Some(Breach {
                        kind: BreachKind::DailyDrawdown,
                        date: daily_date,
                        loss: daily_loss,
                        limit: daily_limit,
                    })
                }
            }
            (Some((index, loss)), None) => Some(Breach {
                kind: BreachKind::MaxDrawdown,
                date: dates[index],
                loss,
                limit: max_limit,
            }),
            (None, Some((date, loss))) => Some(Breach {
                kind: BreachKind::DailyDrawdown,
                date,
                loss,
                limit: daily_limit,
            }),
            (None, None) => None,
        };
        if let Some(b) = &breach {
            tracing::warn!(kind = ?b.kind, date = %b.date, "phase limit breached");
        }

        // --- 4. Progression and payout ---
        let net_profit = summary.net_profit;
        let trading_days = days.len() as u32;
        let profit_target = self.rules.profit_target_pct.map(|pct| self.account_size * pct);

        let status = if breach.is_some() {
            PhaseStatus::Failed
        } else if let Some(target) = profit_target {
            if net_profit >= target && trading_days >= self.rules.min_trading_days {
                PhaseStatus::Passed
            } else {
                PhaseStatus::InProgress
            }
        } else {
            PhaseStatus::InProgress
        };

        let target_progress_pct = profit_target.map(|target| {
            (net_profit / target * dec!(100)).clamp(Decimal::ZERO, dec!(100))
        });

        let payout_eligible = self.rules.kind == PhaseKind::Funded
            && breach.is_none()
            && net_profit > Decimal::ZERO
            && trading_days >= self.rules.min_trading_days;

        let next_phase = match status {
            PhaseStatus::Passed => self.rules.kind.next(),
            _ => None,
        };

        PhaseEvaluation {
            phase: self.rules.kind,
            status,
            breach: breach.map(|b| Breach {
                loss: b.loss.round_dp(2),
                limit: b.limit.round_dp(2),
                ..b
            }),
            ending_balance: summary.final_balance.round_dp(2),
            net_profit: net_profit.round_dp(2),
            max_drawdown_used: max_drawdown_used.round_dp(2),
            trading_days,
            profit_target: profit_target.map(|t| t.round_dp(2)),
            target_progress_pct: target_progress_pct.map(|p| p.round_dp(1)),
            payout_eligible,
            next_phase,
        }
    }
}
