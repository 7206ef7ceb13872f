//! Timestamp token formatting.

use chrono::NaiveDateTime;

/// How much of the wall-clock time makes it into the timestamp token.
///
/// Levels map to numeric CLI values 1 (coarsest, year only) through 6
/// (full second resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Precision {
    /// Map a numeric precision level to a variant.
    ///
    /// Levels outside 1-6 are rejected at the CLI boundary; if one reaches
    /// this function anyway it falls back to full second resolution rather
    /// than producing a corrupted token.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Precision::Year,
            2 => Precision::Month,
            3 => Precision::Day,
            4 => Precision::Hour,
            5 => Precision::Minute,
            _ => Precision::Second,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Precision::Year => "%Y",
            Precision::Month => "%Y%m",
            Precision::Day => "%Y%m%d",
            Precision::Hour => "%Y%m%dT%H",
            Precision::Minute => "%Y%m%dT%H%M",
            Precision::Second => "%Y%m%dT%H%M%S",
        }
    }
}

/// Format a local wall-clock time into a timestamp token.
///
/// The input is naive on purpose: the filesystem collaborator converts file
/// creation time to local time before it gets here, so the core never mixes
/// time bases.
pub fn format_timestamp(timestamp: NaiveDateTime, precision: Precision) -> String {
    timestamp.format(precision.pattern()).to_string()
}
