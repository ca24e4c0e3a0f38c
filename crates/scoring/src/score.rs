use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use statistics::StatisticsReport;

use crate::tables;

/// The six raw metrics the composite score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub avg_win_loss_ratio: Decimal,
    /// Win rate on the 0-100 scale.
    pub win_percentage: Decimal,
    pub max_drawdown_pct: Decimal,
    /// `None` encodes an unbounded profit factor (no losing trades).
    pub profit_factor: Option<Decimal>,
    pub recovery_factor: Decimal,
    /// Already on the 0-100 scale.
    pub consistency_score: Decimal,
}

impl From<&StatisticsReport> for ScoreInputs {
    fn from(report: &StatisticsReport) -> Self {
        Self {
            avg_win_loss_ratio: report.risk_reward_ratio,
            win_percentage: report.win_rate_pct,
            max_drawdown_pct: report.max_drawdown_pct,
            profit_factor: report.profit_factor,
            recovery_factor: report.recovery_factor,
            consistency_score: report.consistency_score,
        }
    }
}

/// The six sub-scores, each on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub avg_win_loss: Decimal,
    pub win_percentage: Decimal,
    pub max_drawdown: Decimal,
    pub profit_factor: Decimal,
    pub recovery_factor: Decimal,
    pub consistency: Decimal,
}

/// The composite 0-100 performance score. Inputs and sub-scores are
/// retained so a dashboard can explain where the number came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZellaScore {
    pub overall_score: u8,
    pub inputs: ScoreInputs,
    pub sub_scores: SubScores,
}

impl ZellaScore {
    /// Scores the six metrics and combines them with the fixed weights:
    /// profit factor 25%, average win/loss 20%, max drawdown 20%, win
    /// percentage 15%, recovery factor 10%, consistency 10%.
    ///
    /// Never fails: degenerate inputs land on the floor of their band, so
    /// even an all-zero metric vector produces a well-defined score.
    pub fn compute(inputs: ScoreInputs) -> Self {
        // Sub-scores are rounded to one decimal place at this boundary;
        // the weighted sum below works from the rounded values a reader
        // of the breakdown would check against.
        let sub_scores = SubScores {
            avg_win_loss: tables::ratio_sub_score(inputs.avg_win_loss_ratio).round_dp(1),
            win_percentage: tables::win_percentage_sub_score(inputs.win_percentage).round_dp(1),
            max_drawdown: tables::drawdown_sub_score(inputs.max_drawdown_pct).round_dp(1),
            // An unbounded profit factor (no losses) is as good as it gets.
            profit_factor: inputs
                .profit_factor
                .map_or(dec!(100), tables::ratio_sub_score)
                .round_dp(1),
            recovery_factor: tables::recovery_sub_score(inputs.recovery_factor).round_dp(1),
            consistency: tables::consistency_sub_score(inputs.consistency_score).round_dp(1),
        };

        let weighted = sub_scores.avg_win_loss * dec!(0.20)
            + sub_scores.win_percentage * dec!(0.15)
            + sub_scores.max_drawdown * dec!(0.20)
            + sub_scores.profit_factor * dec!(0.25)
            + sub_scores.recovery_factor * dec!(0.10)
            + sub_scores.consistency * dec!(0.10);
        let overall_score = weighted.round().to_u8().unwrap_or(0).min(100);

        Self {
            overall_score,
            inputs,
            sub_scores,
        }
    }

    /// Convenience adapter for scoring a computed statistics report.
    pub fn from_report(report: &StatisticsReport) -> Self {
        Self::compute(ScoreInputs::from(report))
    }
}
