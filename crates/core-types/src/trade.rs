use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::TradeOutcome;

/// A single journaled trade, reduced to the fields the statistics and
/// prop-firm engines consume. Upstream import layers carry many more
/// columns (instrument, side, quantity); none of them may leak in here.
///
/// `commission` is stored as a non-negative cost, so net P&L is always
/// `pnl - commission`. A negative commission (a broker rebate) is accepted
/// and simply adds to the net result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Gross profit or loss of the trade, before costs.
    pub pnl: Decimal,
    /// Trading cost charged for the round trip (commissions and fees).
    pub commission: Decimal,
    /// When the trade was entered. Used for chronological ordering and for
    /// calendar-day grouping on UTC day boundaries.
    pub entry_date: DateTime<Utc>,
}

impl TradeRecord {
    pub fn new(pnl: Decimal, commission: Decimal, entry_date: DateTime<Utc>) -> Self {
        Self {
            pnl,
            commission,
            entry_date,
        }
    }

    /// The trade's profit or loss after costs.
    pub fn net_pnl(&self) -> Decimal {
        self.pnl - self.commission
    }

    /// The UTC calendar day this trade belongs to.
    pub fn trading_day(&self) -> NaiveDate {
        self.entry_date.date_naive()
    }

    /// Win/loss/breakeven classification by the sign of the net P&L.
    pub fn outcome(&self) -> TradeOutcome {
        TradeOutcome::from_net_pnl(self.net_pnl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn trade(pnl: Decimal, commission: Decimal) -> TradeRecord {
        let entry = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        TradeRecord::new(pnl, commission, entry)
    }

    #[test]
    fn net_pnl_subtracts_commission() {
        assert_eq!(trade(dec!(120.50), dec!(2.10)).net_pnl(), dec!(118.40));
    }

    #[test]
    fn rebate_commission_adds_to_net() {
        assert_eq!(trade(dec!(100), dec!(-1.50)).net_pnl(), dec!(101.50));
    }

    #[test]
    fn commission_can_flip_a_gross_winner() {
        let t = trade(dec!(1.00), dec!(2.50));
        assert_eq!(t.outcome(), TradeOutcome::Loss);
    }

    #[test]
    fn trading_day_uses_utc_boundaries() {
        let late = TradeRecord::new(
            dec!(10),
            Decimal::ZERO,
            Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap(),
        );
        let early = TradeRecord::new(
            dec!(10),
            Decimal::ZERO,
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 1).unwrap(),
        );
        assert_ne!(late.trading_day(), early.trading_day());
    }
}
