//! # Tradelytics Prop-Firm Evaluation
//!
//! Replays an account's closed trades against the rules of a prop-firm
//! evaluation phase: the daily-loss limit, the maximum-drawdown limit
//! (static or trailing), the profit target, and the minimum trading days
//! required for passing a phase or requesting a payout.
//!
//! Breach detection is the statistics crate's equity walker applied to the
//! account's absolute balance instead of cumulative P&L, with the phase's
//! limits checked at every step.

pub mod error;
pub mod evaluation;
pub mod evaluator;

// Re-export the key components to create a clean, public-facing API.
pub use error::PropFirmError;
pub use evaluation::{Breach, BreachKind, PhaseEvaluation, PhaseStatus};
pub use evaluator::PhaseEvaluator;
