//! Projection output rows

use super::ProjectionParams;
use serde::Serialize;

/// One recorded signal: the (rate, amount, gain, balance) column-group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalEntry {
    /// Drawn rate, rounded to 4 decimals
    pub rate: f64,

    /// Staked amount (1% of the balance at draw time), rounded to 2 decimals
    pub base_amount: f64,

    /// Gain credited by this signal, rounded to 2 decimals
    pub gain: f64,

    /// Running balance after the gain, rounded to 2 decimals
    pub balance: f64,
}

/// One day of the projected ledger
///
/// `signals` always holds the run's full column count; days with fewer
/// active signals pad with `None` so every row has the same shape.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    /// 1-indexed day number
    pub day: u32,

    /// Balance at the start of the day, rounded to 2 decimals
    pub start_balance: f64,

    /// Column-groups, populated or empty placeholder
    pub signals: Vec<Option<SignalEntry>>,

    /// Balance after the day's last active signal, rounded to 2 decimals
    pub end_balance: f64,
}

impl DayRecord {
    /// Number of populated column-groups
    pub fn populated_signals(&self) -> usize {
        self.signals.iter().filter(|s| s.is_some()).count()
    }
}

/// Full projection output
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResult {
    /// Normalized inputs the run used
    pub params: ProjectionParams,

    /// Column-groups per row across the whole run
    pub max_signal_columns: usize,

    /// Day records in order, day 1 first
    pub days: Vec<DayRecord>,
}

/// Round to 2 decimal places (monetary values)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (rates)
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rounding() {
        assert_relative_eq!(round2(1.239), 1.24);
        assert_relative_eq!(round2(10.0), 10.0);
        assert_relative_eq!(round4(0.51236), 0.5124);
    }

    #[test]
    fn test_populated_signals() {
        let entry = SignalEntry {
            rate: 0.51,
            base_amount: 10.0,
            gain: 5.1,
            balance: 1005.1,
        };
        let record = DayRecord {
            day: 1,
            start_balance: 1000.0,
            signals: vec![Some(entry), Some(entry), None, None, None],
            end_balance: 1005.1,
        };
        assert_eq!(record.populated_signals(), 2);
        assert_eq!(record.signals.len(), 5);
    }
}
