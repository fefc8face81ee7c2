//! Day-by-day projection of compounding signal gains
//!
//! The balance opens at invested + first reward and every signal stakes 1%
//! of it at a randomized 50-52% rate, so gains are non-negative and the
//! balance never decreases. The random source is injected: production use
//! draws from the thread RNG, tests pass a seeded generator for exact rows.

use super::ledger::{round2, round4, DayRecord, ProjectionResult, SignalEntry};
use super::{ProjectionParams, MAX_SIGNAL_RATE_BP, MIN_SIGNAL_RATE_BP, STAKE_FRACTION};
use rand::Rng;

/// Projection runner for one set of parameters
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ProjectionParams,
}

impl ProjectionEngine {
    /// Create an engine; inputs are normalized here so every run sees valid
    /// counts.
    pub fn new(params: ProjectionParams) -> Self {
        Self {
            params: params.normalized(),
        }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Run with the thread-local RNG (non-reproducible)
    pub fn run(&self) -> ProjectionResult {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Run with a caller-supplied RNG
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> ProjectionResult {
        let max_columns = self.params.max_signal_columns();
        let mut balance = self.params.invested + self.params.first_reward;
        let mut days = Vec::with_capacity(self.params.days as usize);

        for day in 1..=self.params.days {
            let start_balance = round2(balance);
            let active = self
                .params
                .active_signals(day)
                .min(max_columns as u32);

            let mut signals: Vec<Option<SignalEntry>> = Vec::with_capacity(max_columns);
            for _ in 0..active {
                let rate =
                    rng.gen_range(MIN_SIGNAL_RATE_BP..=MAX_SIGNAL_RATE_BP) as f64 / 10_000.0;
                let stake = balance * STAKE_FRACTION;
                let gain = stake * rate;
                balance += gain;

                signals.push(Some(SignalEntry {
                    rate: round4(rate),
                    base_amount: round2(stake),
                    gain: round2(gain),
                    balance: round2(balance),
                }));
            }
            signals.resize(max_columns, None);

            days.push(DayRecord {
                day,
                start_balance,
                signals,
                end_balance: round2(balance),
            });
        }

        ProjectionResult {
            params: self.params.clone(),
            max_signal_columns: max_columns,
            days,
        }
    }
}
