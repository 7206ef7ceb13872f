//! CFID composition and length-budget enforcement.
//!
//! A CFID is the sentinel-wrapped join of up to three tokens:
//! `⭐️<timestamp>[-<context>][-<random>]❤️`. The sentinels and the `-`
//! delimiters between present tokens are fixed wire format and are never
//! trimmed; only the tokens themselves shrink to satisfy a length budget.

use log::debug;

/// Opening sentinel glyph (star + variation selector, 2 chars).
pub const SENTINEL_PREFIX: &str = "\u{2b50}\u{fe0f}";

/// Closing sentinel glyph (heart + variation selector, 2 chars).
pub const SENTINEL_SUFFIX: &str = "\u{2764}\u{fe0f}";

/// Constant character overhead contributed by the two sentinels.
pub const SENTINEL_OVERHEAD: usize = 4;

/// The three trimmable segments of a CFID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub timestamp: String,
    pub context: String,
    pub random: String,
}

/// Length of a string in characters (Unicode scalar values).
///
/// All CFID budgets are character counts, not byte counts, so that the
/// multi-byte sentinels cost the same on every platform.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Compose the CFID string from the current tokens.
///
/// Empty tokens are omitted together with their preceding delimiter, so the
/// result never contains empty segments or dangling `-`. Pure function; the
/// budget enforcer recomposes from scratch after every trim rather than
/// patching the previous string.
pub fn compose(tokens: &Tokens) -> String {
    let mut parts = vec![format!("{}{}", SENTINEL_PREFIX, tokens.timestamp)];
    if !tokens.context.is_empty() {
        parts.push(tokens.context.clone());
    }
    if !tokens.random.is_empty() {
        parts.push(tokens.random.clone());
    }
    format!("{}{}", parts.join("-"), SENTINEL_SUFFIX)
}

/// Shrink tokens until the composed CFID fits `max_total_length` characters.
///
/// Victims are chosen in strict priority order: the timestamp token loses a
/// character from its right end first, then the context token, then the
/// random token. Coarser time resolution is sacrificed before the
/// human-readable context and the collision-resistant suffix; identifiers
/// already in the wild depend on this exact order.
///
/// Returns `true` when the budget is satisfied. Returns `false` when all
/// three tokens are exhausted and the sentinel overhead alone still exceeds
/// the budget; the caller decides whether that is an error. Iteration is
/// capped at the initial total token length, so the loop terminates even in
/// the degenerate case.
pub fn fit_to_budget(tokens: &mut Tokens, max_total_length: usize) -> bool {
    let cap = char_len(&tokens.timestamp) + char_len(&tokens.context) + char_len(&tokens.random);

    for _ in 0..=cap {
        if char_len(&compose(tokens)) <= max_total_length {
            return true;
        }
        if tokens.timestamp.pop().is_some() {
            continue;
        }
        if tokens.context.pop().is_some() {
            continue;
        }
        if tokens.random.pop().is_some() {
            continue;
        }
        // All tokens empty; nothing left to trim.
        break;
    }

    let fits = char_len(&compose(tokens)) <= max_total_length;
    if !fits {
        debug!(
            "budget {} below sentinel overhead {}, returning over-budget remainder",
            max_total_length, SENTINEL_OVERHEAD
        );
    }
    fits
}
