use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a trade (or a trading day) by the sign of its net P&L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    Win,
    Loss,
    Breakeven,
}

impl TradeOutcome {
    /// Classifies a net P&L value. The partition is strict: only an exact
    /// zero counts as breakeven.
    pub fn from_net_pnl(net_pnl: Decimal) -> Self {
        if net_pnl > Decimal::ZERO {
            TradeOutcome::Win
        } else if net_pnl < Decimal::ZERO {
            TradeOutcome::Loss
        } else {
            TradeOutcome::Breakeven
        }
    }
}

/// How a prop firm anchors its maximum-drawdown limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownMode {
    /// Drawdown is measured from the fixed starting balance.
    Static,
    /// Drawdown is measured from the highest balance reached so far.
    Trailing,
}

/// A stage in a prop-firm evaluation program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Phase1,
    Phase2,
    Funded,
}

impl PhaseKind {
    /// Returns the stage a trader advances to after passing this one.
    pub fn next(&self) -> Option<Self> {
        match self {
            PhaseKind::Phase1 => Some(PhaseKind::Phase2),
            PhaseKind::Phase2 => Some(PhaseKind::Funded),
            PhaseKind::Funded => None,
        }
    }
}
