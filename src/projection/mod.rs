//! Compound-growth projection engine for signal-based earnings illustrations

mod params;
mod engine;
mod ledger;
mod export;

pub use params::ProjectionParams;
pub use engine::ProjectionEngine;
pub use ledger::{DayRecord, SignalEntry, ProjectionResult};
pub use export::write_ledger;

// ============================================================================
// Signal Rate Model
// ============================================================================
// Each signal stakes 1% of the running balance and returns a randomized rate
// drawn uniformly in basis points, matching the 50-52% per-signal mechanic
// of the source program.

/// Inclusive lower bound of the per-signal rate draw, in basis points (50.00%)
pub const MIN_SIGNAL_RATE_BP: u32 = 5000;

/// Inclusive upper bound of the per-signal rate draw, in basis points (52.00%)
pub const MAX_SIGNAL_RATE_BP: u32 = 5200;

/// Fraction of the running balance staked on each signal (1%)
pub const STAKE_FRACTION: f64 = 0.01;
