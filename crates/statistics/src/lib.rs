//! # Tradelytics Statistics Engine
//!
//! This crate derives the full trading-journal performance picture from a
//! collection of closed trades: win/loss aggregates, streaks, the equity
//! curve with its drawdowns, and the daily-consistency score.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatisticsEngine` is a stateless
//!   calculator. It takes a slice of trades plus a report timestamp and
//!   produces a `StatisticsReport`; the same input always yields the same
//!   output.
//! - **Infallible by Design:** Degenerate inputs (no trades, no losers,
//!   zero variance) produce well-defined zeroed metrics, never errors.
//!   Every ratio guards its denominator.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the main struct that contains the calculation logic.
//! - `StatisticsReport`: the standardized struct that holds all computed metrics.
//! - `walk_equity` / `daily_net_pnl`: the equity-curve and day-grouping
//!   primitives, shared with the prop-firm evaluator.

// Declare the modules that constitute this crate.
pub mod consistency;
pub mod daily;
pub mod engine;
pub mod equity;
pub mod report;
pub mod streaks;

// Re-export the key components to create a clean, public-facing API.
pub use consistency::consistency_score;
pub use daily::daily_net_pnl;
pub use engine::StatisticsEngine;
pub use equity::{walk_equity, EquityStep, EquitySummary};
pub use report::StatisticsReport;
pub use streaks::StreakSummary;
