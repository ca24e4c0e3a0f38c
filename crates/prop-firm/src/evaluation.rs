use chrono::NaiveDate;
use core_types::PhaseKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which configured limit a breach violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreachKind {
    /// A single day's loss exceeded the daily-drawdown limit.
    DailyDrawdown,
    /// The account's total drawdown exceeded the maximum-drawdown limit.
    MaxDrawdown,
}

/// The first rule violation found while replaying an account's trades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    pub kind: BreachKind,
    /// The UTC trading day the violation occurred on.
    pub date: NaiveDate,
    /// The loss that was measured against the limit.
    pub loss: Decimal,
    /// The configured limit that was exceeded.
    pub limit: Decimal,
}

/// Where the account stands against its phase rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseStatus {
    /// Profit target and minimum trading days both met, with no breach.
    Passed,
    /// A drawdown limit was violated.
    Failed,
    /// Still trading. For a funded phase (no profit target) this is the
    /// steady state.
    InProgress,
}

/// Full result of evaluating an account's trades against one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseEvaluation {
    pub phase: PhaseKind,
    pub status: PhaseStatus,
    pub breach: Option<Breach>,
    pub ending_balance: Decimal,
    pub net_profit: Decimal,
    /// Worst drawdown observed, measured per the phase's drawdown mode.
    pub max_drawdown_used: Decimal,
    /// Number of distinct UTC days with at least one trade.
    pub trading_days: u32,
    /// The profit target in account currency, if this phase has one.
    pub profit_target: Option<Decimal>,
    /// Progress towards the profit target, clamped to 0-100.
    pub target_progress_pct: Option<Decimal>,
    /// Whether a funded account currently qualifies for a payout.
    pub payout_eligible: bool,
    /// The phase the trader advances to when `status` is `Passed`.
    pub next_phase: Option<PhaseKind>,
}
