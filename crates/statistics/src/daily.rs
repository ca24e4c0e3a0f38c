use std::collections::BTreeMap;

use chrono::NaiveDate;
use core_types::TradeRecord;
use rust_decimal::Decimal;

/// Groups trades into UTC calendar days and sums the net P&L of each day.
///
/// The `BTreeMap` keeps days in ascending date order, which the day-level
/// streak scan and the prop-firm daily-limit check rely on.
pub fn daily_net_pnl(trades: &[TradeRecord]) -> BTreeMap<NaiveDate, Decimal> {
    let mut days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for trade in trades {
        *days.entry(trade.trading_day()).or_insert(Decimal::ZERO) += trade.net_pnl();
    }
    days
}
