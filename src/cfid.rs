//! The CFID generation pipeline.

use crate::compose::{self, SENTINEL_OVERHEAD, Tokens};
use crate::config::IdConfig;
use crate::random::random_suffix;
use crate::timestamp::format_timestamp;
use chrono::NaiveDateTime;
use log::debug;
use rand::Rng;

/// Errors that can occur during CFID generation.
#[derive(Debug, Clone, PartialEq)]
pub enum IdError {
    /// Invalid generation parameters.
    Config(crate::config::ConfigError),
    /// The length budget is below the fixed sentinel overhead; even with
    /// every token trimmed to nothing the CFID cannot fit.
    BudgetTooSmall { max: usize, minimum: usize },
}

impl std::fmt::Display for IdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdError::Config(e) => write!(f, "invalid configuration: {}", e),
            IdError::BudgetTooSmall { max, minimum } => write!(
                f,
                "max total length {} is below the sentinel overhead of {} characters",
                max, minimum
            ),
        }
    }
}

impl std::error::Error for IdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdError::Config(e) => Some(e),
            IdError::BudgetTooSmall { .. } => None,
        }
    }
}

impl From<crate::config::ConfigError> for IdError {
    fn from(e: crate::config::ConfigError) -> Self {
        IdError::Config(e)
    }
}

/// Generate a CFID from a local wall-clock timestamp and a context string.
///
/// Runs the full pipeline: format the timestamp at the configured precision,
/// truncate the context, draw the random suffix, compose, then trim tokens
/// until the result fits `config.max_total_length` characters.
///
/// Fails with [`IdError::BudgetTooSmall`] when the budget cannot be met even
/// with all tokens empty, rather than returning a truncated sentinel or
/// looping forever.
pub fn make_cfid(
    timestamp: NaiveDateTime,
    context_path: &str,
    config: &IdConfig,
) -> Result<String, IdError> {
    make_cfid_with(&mut rand::rng(), timestamp, context_path, config)
}

/// Like [`make_cfid`], with a caller-supplied randomness source.
///
/// A seeded `StdRng` makes generation fully deterministic, which tests rely
/// on. Production callers use [`make_cfid`] and the thread-local generator.
pub fn make_cfid_with<R: Rng>(
    rng: &mut R,
    timestamp: NaiveDateTime,
    context_path: &str,
    config: &IdConfig,
) -> Result<String, IdError> {
    config.validate()?;

    let mut tokens = Tokens {
        timestamp: format_timestamp(timestamp, config.precision),
        context: context_token(context_path, config),
        random: random_suffix(rng, config.random_length, &config.charset),
    };

    if !compose::fit_to_budget(&mut tokens, config.max_total_length) {
        return Err(IdError::BudgetTooSmall {
            max: config.max_total_length,
            minimum: SENTINEL_OVERHEAD,
        });
    }

    let cfid = compose::compose(&tokens);
    debug!("generated CFID of {} characters", compose::char_len(&cfid));
    Ok(cfid)
}

/// Derive the context token: truncate to the context limit, then substitute
/// whitespace if requested.
fn context_token(context_path: &str, config: &IdConfig) -> String {
    let truncated: String = context_path.chars().take(config.context_limit).collect();
    if config.replace_whitespace {
        truncated.replace(' ', "_")
    } else {
        truncated
    }
}
