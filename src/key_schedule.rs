//! Key validation and expansion.
//!
//! Implements the Validator and KeyExpander stages. Raw keys are
//! lowercase ASCII strings; each participating key is cycled out to a
//! fixed target length taken from [`KEY_LENGTHS`], producing the
//! effective subkeys the keystream draws from.

use crate::error::SvigError;

/// Target lengths for the effective subkeys, indexed by `k % 9`.
///
/// The entries are pairwise distinct so that subkeys of different
/// lengths drift out of phase with each other, lengthening the combined
/// period. The final entry is 27, not a prime like its neighbours; the
/// value is deliberate and must not be "fixed".
pub(crate) const KEY_LENGTHS: [usize; 9] = [2, 3, 5, 7, 11, 13, 17, 23, 27];

/// Returns the target length for subkey index `k` (0-based).
///
/// Indices beyond the table cycle back to its start, so any subkey
/// count is supported.
pub(crate) fn target_length(k: usize) -> usize {
    KEY_LENGTHS[k % KEY_LENGTHS.len()]
}

/// Checks the structural preconditions shared by encrypt and decrypt.
///
/// # Parameters
/// - `keys`: The caller-supplied raw keys, in order.
/// - `subkey_count`: How many of the leading keys participate.
///
/// # Errors
/// - [`SvigError::ZeroSubkeyCount`] if `subkey_count == 0`.
/// - [`SvigError::InsufficientKeys`] if fewer than `subkey_count` keys
///   were supplied.
/// - [`SvigError::EmptyKey`] if a participating key is empty.
/// - [`SvigError::InvalidKeyChar`] if a participating key contains a
///   character outside `a`-`z`.
///
/// Only the first `subkey_count` keys are inspected; trailing keys may
/// be anything.
pub(crate) fn validate<S: AsRef<str>>(keys: &[S], subkey_count: usize) -> Result<(), SvigError> {
    if subkey_count == 0 {
        return Err(SvigError::ZeroSubkeyCount);
    }
    if keys.len() < subkey_count {
        return Err(SvigError::InsufficientKeys {
            required: subkey_count,
            supplied: keys.len(),
        });
    }
    for (index, key) in keys.iter().take(subkey_count).enumerate() {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(SvigError::EmptyKey { index });
        }
        for ch in key.chars() {
            if !ch.is_ascii_lowercase() {
                return Err(SvigError::InvalidKeyChar { index, ch });
            }
        }
    }
    Ok(())
}

/// Expands one raw key to an effective subkey of exactly `target` letter
/// values (0-25).
///
/// The raw key is repeated end-to-end, cycling from its start, and
/// truncated to `target` characters. The raw key is non-empty by the
/// time this runs, so the cycle always terminates.
pub(crate) fn expand(raw: &str, target: usize) -> Vec<u8> {
    raw.bytes().map(|b| b - b'a').cycle().take(target).collect()
}

/// Derives the effective subkeys for the first `subkey_count` raw keys.
///
/// Subkey `k` is expanded to `KEY_LENGTHS[k % 9]` values. Must be called
/// after [`validate`] has passed.
pub(crate) fn effective_keys<S: AsRef<str>>(keys: &[S], subkey_count: usize) -> Vec<Vec<u8>> {
    keys.iter()
        .take(subkey_count)
        .enumerate()
        .map(|(k, raw)| expand(raw.as_ref(), target_length(k)))
        .collect()
}
