pub mod enums;
pub mod trade;

// Re-export the core types to provide a clean public API.
pub use enums::{DrawdownMode, PhaseKind, TradeOutcome};
pub use trade::TradeRecord;
