use core_types::{DrawdownMode, PhaseKind};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub account: AccountSettings,
    pub phases: Vec<PhaseRules>,
}

/// Describes the evaluated account itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSettings {
    /// The account's starting balance, which every drawdown limit and
    /// profit target is a percentage of (e.g. 5000).
    pub account_size: Decimal,
}

/// The rule set for one stage of a prop-firm evaluation program.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseRules {
    /// Display name, e.g. "Phase 1" or "Funded".
    pub name: String,
    pub kind: PhaseKind,
    /// Largest tolerated single-day loss as a fraction of account size
    /// (0.04 for 4%), measured from the day's opening balance.
    pub daily_drawdown_pct: Decimal,
    /// Largest tolerated total drawdown as a fraction of account size
    /// (0.08 for 8%).
    pub max_drawdown_pct: Decimal,
    /// Whether the max-drawdown anchor is the starting balance or the
    /// trailing balance peak.
    pub drawdown_mode: DrawdownMode,
    /// Profit target as a fraction of account size. Funded phases have none.
    pub profit_target_pct: Option<Decimal>,
    /// Distinct trading days required before the phase can be passed (or a
    /// payout requested).
    pub min_trading_days: u32,
}

impl Config {
    /// Checks the cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.account_size <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "account.account_size must be greater than 0".to_string(),
            ));
        }
        if self.phases.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one phase must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Looks up a phase by its display name (case-insensitive).
    pub fn phase(&self, name: &str) -> Option<&PhaseRules> {
        self.phases.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
