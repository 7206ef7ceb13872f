//! Generation parameters for CFID construction.

use crate::timestamp::Precision;

/// Default charset for the random suffix: ASCII letters and digits.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Immutable parameters for one CFID generation call.
///
/// Passed explicitly to every stage that needs it; there is no process-wide
/// configuration state.
#[derive(Debug, Clone, PartialEq)]
pub struct IdConfig {
    /// Timestamp token resolution.
    pub precision: Precision,

    /// Max characters retained from the context string before budget trimming.
    pub context_limit: usize,

    /// Random suffix length; 0 omits the suffix entirely.
    pub random_length: usize,

    /// Character population the random suffix is drawn from.
    pub charset: Vec<char>,

    /// Hard cap on the final CFID length, in characters.
    pub max_total_length: usize,

    /// Replace spaces in the context token with underscores.
    pub replace_whitespace: bool,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            precision: Precision::Second,
            context_limit: 100,
            random_length: 0,
            charset: DEFAULT_CHARSET.chars().collect(),
            max_total_length: 127,
            replace_whitespace: false,
        }
    }
}

impl IdConfig {
    /// Check the configuration for combinations no generation can satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_total_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        if self.random_length > 0 && self.charset.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        Ok(())
    }
}

/// Invalid configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A random suffix was requested but the charset has no characters.
    EmptyCharset,
    /// The total length budget must be positive.
    ZeroMaxLength,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyCharset => {
                write!(f, "cannot draw a random suffix from an empty charset")
            }
            ConfigError::ZeroMaxLength => write!(f, "max total length must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}
