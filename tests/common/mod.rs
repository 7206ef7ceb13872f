//! Shared test infrastructure for cfid integration tests.
//!
//! Provides a fixed reference timestamp and config builders so every suite
//! exercises the same inputs.

#![allow(dead_code)]

use cfid::{IdConfig, Precision};
use chrono::{NaiveDate, NaiveDateTime};

/// The fixed reference time used across suites: 2024-11-22T10:15:30.
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 22)
        .unwrap()
        .and_hms_opt(10, 15, 30)
        .unwrap()
}

/// Default config: precision 6, context limit 100, no suffix, budget 127.
pub fn base_config() -> IdConfig {
    IdConfig::default()
}

/// Config with a length budget override.
pub fn config_with_budget(max_total_length: usize) -> IdConfig {
    IdConfig {
        max_total_length,
        ..IdConfig::default()
    }
}

/// Config with a random suffix of the given length.
pub fn config_with_suffix(random_length: usize) -> IdConfig {
    IdConfig {
        random_length,
        ..IdConfig::default()
    }
}

/// Config at a specific timestamp precision.
pub fn config_with_precision(precision: Precision) -> IdConfig {
    IdConfig {
        precision,
        ..IdConfig::default()
    }
}
