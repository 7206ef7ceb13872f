//! Random suffix generation for CFIDs.

use rand::Rng;

/// Draw a random suffix of `length` characters from `charset`.
///
/// Each character is chosen independently and uniformly with replacement,
/// so repeats are expected. The suffix is for disambiguation only and is
/// not cryptographically secure.
///
/// A zero `length` yields an empty string; the composer then omits the
/// suffix segment entirely. `charset` must be non-empty when `length > 0`,
/// which config validation guarantees before this is called.
pub fn random_suffix<R: Rng>(rng: &mut R, length: usize, charset: &[char]) -> String {
    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect()
}
