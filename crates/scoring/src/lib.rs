//! # Tradelytics Composite Scoring
//!
//! Maps six performance metrics onto fixed piecewise-linear curves and
//! combines the resulting sub-scores into the single 0-100 "Zella score"
//! shown on the dashboard.
//!
//! The curves and weights are product constants, not tunables; they live
//! in `tables` and `score` respectively. The scorer is infallible:
//! degenerate inputs land on the floor of their band rather than producing
//! an error.

pub mod score;
pub mod tables;

// Re-export the key components to create a clean, public-facing API.
pub use score::{ScoreInputs, SubScores, ZellaScore};
