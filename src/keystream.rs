//! Composite shift computation.
//!
//! The keystream stacks all effective subkeys on top of each other: at
//! letter ordinal `i`, each subkey contributes the value of its own
//! character at `i` modulo its own length, and the sum collapses to a
//! single shift in `[0, 26)`. Because the subkey lengths are pairwise
//! distinct, the contributions drift relative to each other as `i`
//! grows; this stacking is what the cipher is named for.

use crate::alphabet::ALPHABET_LEN;

/// Returns the composite shift for the letter at alphabetic ordinal
/// `ordinal`.
///
/// # Parameters
/// - `effective_keys`: The expanded subkeys, each a non-empty vector of
///   letter values in `[0, 26)`.
/// - `ordinal`: 0-based rank of the letter among the letters of the
///   original text.
///
/// # Returns
/// The stacked shift value in `[0, 26)`.
pub(crate) fn composite(effective_keys: &[Vec<u8>], ordinal: usize) -> u8 {
    let sum: u32 = effective_keys
        .iter()
        .map(|subkey| subkey[ordinal % subkey.len()] as u32)
        .sum();
    (sum % ALPHABET_LEN as u32) as u8
}
