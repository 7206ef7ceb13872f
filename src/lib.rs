//! CFID: composite file identifier generation for archival files.
//!
//! A CFID labels a file with a compact, bounded-length token built from the
//! file's creation timestamp, a contextual string (its filename), and an
//! optional random suffix, wrapped in fixed sentinel glyphs:
//! `⭐️<timestamp>[-<context>][-<random>]❤️`.
//!
//! When the composed identifier exceeds the configured length budget, tokens
//! are trimmed one character at a time from the right, in strict priority
//! order: timestamp first (coarser time resolution is the cheapest loss),
//! then context, then the random suffix.
//!
//! # Example
//!
//! ```
//! use cfid::{IdConfig, Precision, make_cfid};
//! use chrono::NaiveDate;
//!
//! let timestamp = NaiveDate::from_ymd_opt(2024, 11, 22)
//!     .unwrap()
//!     .and_hms_opt(10, 15, 30)
//!     .unwrap();
//!
//! let config = IdConfig {
//!     precision: Precision::Second,
//!     ..Default::default()
//! };
//!
//! let id = make_cfid(timestamp, "myfile.txt", &config).unwrap();
//! assert_eq!(id, "⭐️20241122T101530-myfile.txt❤️");
//! ```

mod cfid;
mod random;

pub mod compose;
pub mod config;
pub mod fsmeta;
pub mod output;
pub mod timestamp;

// Re-export public API
pub use cfid::{IdError, make_cfid, make_cfid_with};
pub use compose::{SENTINEL_OVERHEAD, SENTINEL_PREFIX, SENTINEL_SUFFIX};
pub use config::{ConfigError, DEFAULT_CHARSET, IdConfig};
pub use timestamp::Precision;
