use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Scores how evenly daily profits are distributed, from 0 to 100.
///
/// An unprofitable trader is never "consistent": a negative average daily
/// P&L scores 0 outright, as does a zero total net profit (which would make
/// the ratio below meaningless). Otherwise the score penalizes the
/// population standard deviation of the daily P&L relative to the total
/// net profit, clamped into the 0-100 range.
pub fn consistency_score(
    daily_pnl: &BTreeMap<NaiveDate, Decimal>,
    total_net_profit: Decimal,
) -> Decimal {
    if daily_pnl.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(daily_pnl.len());
    let sum: Decimal = daily_pnl.values().copied().sum();
    let mean = sum / count;
    if mean < Decimal::ZERO || total_net_profit == Decimal::ZERO {
        return Decimal::ZERO;
    }

    let variance = daily_pnl
        .values()
        .map(|pnl| (*pnl - mean) * (*pnl - mean))
        .sum::<Decimal>()
        / count;
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    (dec!(100) - (std_dev / total_net_profit) * dec!(100)).clamp(Decimal::ZERO, dec!(100))
}
