//! Transform engine: the encrypt/decrypt walk over the text.
//!
//! Both directions share a single forward pass. Each letter's shift is
//! selected by its alphabetic ordinal (its rank among the letters of the
//! original text), which a forward walk produces for free by counting
//! letters as it goes; encryption adds the shift, decryption subtracts
//! it. Non-letters are copied through at their original positions and
//! never touch the ordinal.

use crate::alphabet::Letter;
use crate::error::SvigError;
use crate::key_schedule::{effective_keys, validate};
use crate::keystream::composite;

/// Conventional subkey count for callers without a preference of their
/// own.
pub const DEFAULT_SUBKEY_COUNT: usize = 7;

/// Direction of the transform walk.
#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Shared walk for both directions.
///
/// Validates, expands the participating keys, then scans the text
/// left-to-right with a running letter ordinal.
fn transform<S: AsRef<str>>(
    text: &str,
    keys: &[S],
    subkey_count: usize,
    direction: Direction,
) -> Result<String, SvigError> {
    validate(keys, subkey_count)?;
    let subkeys = effective_keys(keys, subkey_count);

    let mut output = String::with_capacity(text.len());
    let mut ordinal = 0usize;
    for c in text.chars() {
        match Letter::from_char(c) {
            None => output.push(c),
            Some(letter) => {
                let shift = composite(&subkeys, ordinal);
                let transformed = match direction {
                    Direction::Encrypt => letter.shifted(shift),
                    Direction::Decrypt => letter.unshifted(shift),
                };
                output.push(transformed.to_char());
                ordinal += 1;
            }
        }
    }
    Ok(output)
}

/// Encrypts `text` with the first `subkey_count` of `keys`.
///
/// Letters are shifted forward by the stacked keystream value at their
/// ordinal; case is preserved per character and non-letters pass
/// through unchanged at their original positions.
///
/// # Parameters
/// - `text`: The plaintext. Any string; only ASCII letters are
///   transformed.
/// - `keys`: Ordered raw keys, each a non-empty lowercase ASCII string.
/// - `subkey_count`: How many of the leading keys participate (at
///   least 1, at most `keys.len()`).
///
/// # Errors
/// Returns [`SvigError`] if the keys or subkey count fail validation;
/// see [`SvigError`] for the individual conditions.
///
/// # Examples
///
/// ```
/// let ct = svig::encrypt("aaaa aaaa", &["ab", "cde", "fghij", "zyx"], 4).unwrap();
/// assert_eq!(ct, "giik khhk");
/// ```
///
/// ```
/// use svig::error::SvigError;
///
/// let result = svig::encrypt("text", &["only", "two"], 3);
/// assert!(matches!(result, Err(SvigError::InsufficientKeys { .. })));
/// ```
pub fn encrypt<S: AsRef<str>>(
    text: &str,
    keys: &[S],
    subkey_count: usize,
) -> Result<String, SvigError> {
    transform(text, keys, subkey_count, Direction::Encrypt)
}

/// Decrypts `text` with the first `subkey_count` of `keys`.
///
/// Exact inverse of [`encrypt`] for identical keys and subkey count:
/// each letter is shifted backward by the same stacked keystream value
/// it was shifted forward by, selected by its rank among the letters of
/// the forward text.
///
/// # Parameters
/// - `text`: The ciphertext.
/// - `keys`: Ordered raw keys, each a non-empty lowercase ASCII string.
/// - `subkey_count`: How many of the leading keys participate (at
///   least 1, at most `keys.len()`).
///
/// # Errors
/// Returns [`SvigError`] under the same conditions as [`encrypt`].
///
/// # Examples
///
/// ```
/// let pt = svig::decrypt("giik khhk", &["ab", "cde", "fghij", "zyx"], 4).unwrap();
/// assert_eq!(pt, "aaaa aaaa");
/// ```
pub fn decrypt<S: AsRef<str>>(
    text: &str,
    keys: &[S],
    subkey_count: usize,
) -> Result<String, SvigError> {
    transform(text, keys, subkey_count, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 4] = ["ab", "cde", "fghij", "zyx"];

    #[test]
    fn test_encrypt_reference_vector() {
        assert_eq!(encrypt("aaaa aaaa", &KEYS, 4).unwrap(), "giik khhk");
    }

    #[test]
    fn test_decrypt_reference_vector() {
        assert_eq!(decrypt("giik khhk", &KEYS, 4).unwrap(), "aaaa aaaa");
    }

    #[test]
    fn test_roundtrip_mixed_text() {
        let text = "The quick brown Fox jumps over 13 lazy dogs!";
        let ct = encrypt(text, &KEYS, 4).unwrap();
        assert_ne!(ct, text);
        assert_eq!(decrypt(&ct, &KEYS, 4).unwrap(), text);
    }

    #[test]
    fn test_roundtrip_with_fewer_subkeys() {
        let text = "stacked vigenere";
        for n in 1..=4 {
            let ct = encrypt(text, &KEYS, n).unwrap();
            assert_eq!(decrypt(&ct, &KEYS, n).unwrap(), text, "n = {n}");
        }
    }

    #[test]
    fn test_non_letters_pass_through_in_place() {
        let ct = encrypt("a, b; c.", &KEYS, 4).unwrap();
        let punct: Vec<(usize, char)> = ct
            .char_indices()
            .filter(|(_, c)| !c.is_ascii_alphabetic())
            .collect();
        assert_eq!(punct, vec![(1, ','), (2, ' '), (4, ';'), (5, ' '), (7, '.')]);
    }

    #[test]
    fn test_case_preserved_per_character() {
        let ct = encrypt("AbCd", &KEYS, 4).unwrap();
        let cases: Vec<bool> = ct.chars().map(|c| c.is_ascii_uppercase()).collect();
        assert_eq!(cases, vec![true, false, true, false]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encrypt("", &KEYS, 4).unwrap(), "");
        assert_eq!(decrypt("", &KEYS, 4).unwrap(), "");
    }

    #[test]
    fn test_no_letter_text_unchanged() {
        let text = "12345 -- 67890 !?";
        assert_eq!(encrypt(text, &KEYS, 4).unwrap(), text);
        assert_eq!(decrypt(text, &KEYS, 4).unwrap(), text);
    }

    #[test]
    fn test_deterministic() {
        let text = "determinism check";
        assert_eq!(
            encrypt(text, &KEYS, 4).unwrap(),
            encrypt(text, &KEYS, 4).unwrap()
        );
    }

    #[test]
    fn test_both_directions_validate() {
        assert_eq!(encrypt("x", &KEYS, 0), Err(SvigError::ZeroSubkeyCount));
        assert_eq!(decrypt("x", &KEYS, 0), Err(SvigError::ZeroSubkeyCount));
        assert_eq!(
            encrypt("x", &["a", ""], 2),
            Err(SvigError::EmptyKey { index: 1 })
        );
        assert_eq!(
            decrypt("x", &["a", ""], 2),
            Err(SvigError::EmptyKey { index: 1 })
        );
    }

    #[test]
    fn test_more_than_nine_subkeys_roundtrip() {
        // Forces the length table to cycle.
        let keys: Vec<String> = "abcdefghijkl".chars().map(String::from).collect();
        let text = "the table has only nine entries";
        let ct = encrypt(text, &keys, 12).unwrap();
        assert_eq!(decrypt(&ct, &keys, 12).unwrap(), text);
    }

    #[test]
    fn test_default_subkey_count_usable() {
        let keys = ["aa", "bb", "cc", "dd", "ee", "ff", "gg"];
        let ct = encrypt("hello", &keys, DEFAULT_SUBKEY_COUNT).unwrap();
        assert_eq!(decrypt(&ct, &keys, DEFAULT_SUBKEY_COUNT).unwrap(), "hello");
    }
}
