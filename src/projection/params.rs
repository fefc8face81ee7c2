//! Projection input parameters
//!
//! Mirrors the export request the surrounding application accepts from a
//! query string or form body. Inputs are never rejected: counts below 1 are
//! coerced up to 1 and unparseable numbers coerce to 0, matching the
//! lenient policy of an illustrative tool.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters for one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Starting capital
    /// Default: 1000
    #[serde(default = "default_invested")]
    pub invested: f64,

    /// One-time bonus added to the opening balance before day 1
    #[serde(default)]
    pub first_reward: f64,

    /// Signals taken each day (ignored per-day in first-time mode)
    /// Default: 2
    #[serde(default = "default_signals")]
    pub signals_per_day: u32,

    /// Projection horizon in days
    /// Default: 30
    #[serde(default = "default_days")]
    pub days: u32,

    /// First-time mode: fixed 2/5/2 signal schedule, five-column rows
    #[serde(default)]
    pub first_time: bool,
}

fn default_invested() -> f64 { 1000.0 }
fn default_signals() -> u32 { 2 }
fn default_days() -> u32 { 30 }

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            invested: 1000.0,
            first_reward: 0.0,
            signals_per_day: 2,
            days: 30,
            first_time: false,
        }
    }
}

impl ProjectionParams {
    /// Apply input coercion: counts at least 1, amounts non-negative
    pub fn normalized(mut self) -> Self {
        self.invested = self.invested.max(0.0);
        self.first_reward = self.first_reward.max(0.0);
        self.signals_per_day = self.signals_per_day.max(1);
        self.days = self.days.max(1);
        self
    }

    /// Build from raw request pairs (query string or form body)
    ///
    /// Recognized keys: `invested`, `firstReward`, `signals`, `days`,
    /// `firstTime`. Missing keys take defaults; unparseable values coerce
    /// to 0 and are then normalized.
    pub fn from_request(pairs: &HashMap<String, String>) -> Self {
        let get = |key: &str| pairs.get(key).map(String::as_str);
        Self {
            invested: get("invested").map_or(1000.0, parse_amount),
            first_reward: get("firstReward").map_or(0.0, parse_amount),
            signals_per_day: get("signals").map_or(2, parse_count),
            days: get("days").map_or(30, parse_count),
            first_time: get("firstTime").map_or(false, parse_flag),
        }
        .normalized()
    }

    /// Column-groups every day's row carries, populated or not
    pub fn max_signal_columns(&self) -> usize {
        if self.first_time {
            5
        } else {
            self.signals_per_day.max(1) as usize
        }
    }

    /// Signals actually taken on the given day (1-indexed)
    pub fn active_signals(&self, day: u32) -> u32 {
        if self.first_time {
            match day {
                1 => 2,
                2..=6 => 5,
                _ => 2,
            }
        } else {
            self.signals_per_day.max(1)
        }
    }
}

/// Lenient amount parse: 0 on failure
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Lenient count parse: 0 on failure (normalization raises it to 1)
pub fn parse_count(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}

/// Boolean-ish request flag ("1", "true", "yes", "on")
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let params = ProjectionParams::default();
        assert_relative_eq!(params.invested, 1000.0);
        assert_relative_eq!(params.first_reward, 0.0);
        assert_eq!(params.signals_per_day, 2);
        assert_eq!(params.days, 30);
        assert!(!params.first_time);
    }

    #[test]
    fn test_normalization_coerces_up() {
        let params = ProjectionParams {
            invested: -50.0,
            first_reward: -1.0,
            signals_per_day: 0,
            days: 0,
            first_time: false,
        }
        .normalized();

        assert_relative_eq!(params.invested, 0.0);
        assert_relative_eq!(params.first_reward, 0.0);
        assert_eq!(params.signals_per_day, 1);
        assert_eq!(params.days, 1);
    }

    #[test]
    fn test_from_request_lenient_parse() {
        let mut pairs = HashMap::new();
        pairs.insert("invested".to_string(), "2500.75".to_string());
        pairs.insert("signals".to_string(), "abc".to_string());
        pairs.insert("firstTime".to_string(), "1".to_string());

        let params = ProjectionParams::from_request(&pairs);
        assert_relative_eq!(params.invested, 2500.75);
        // Unparseable count coerces to 0 then up to 1
        assert_eq!(params.signals_per_day, 1);
        assert_eq!(params.days, 30);
        assert!(params.first_time);
    }

    #[test]
    fn test_first_time_schedule() {
        let params = ProjectionParams {
            first_time: true,
            ..Default::default()
        };

        assert_eq!(params.active_signals(1), 2);
        assert_eq!(params.active_signals(2), 5);
        assert_eq!(params.active_signals(3), 5);
        assert_eq!(params.active_signals(6), 5);
        assert_eq!(params.active_signals(7), 2);
        assert_eq!(params.active_signals(10), 2);
        assert_eq!(params.max_signal_columns(), 5);
    }

    #[test]
    fn test_standard_schedule() {
        let params = ProjectionParams {
            signals_per_day: 3,
            ..Default::default()
        };

        for day in 1..=10 {
            assert_eq!(params.active_signals(day), 3);
        }
        assert_eq!(params.max_signal_columns(), 3);
    }
}
