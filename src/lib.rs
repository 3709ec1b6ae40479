//! S-Vig stacked Vigenère cipher engine.
//!
//! S-Vig is a reversible, multi-key polyalphabetic substitution cipher.
//! Several independently-lengthed subkeys are layered on top of each
//! other: every letter of the text is shifted by a composite value built
//! from all subkeys at that letter's position, and because the subkeys
//! have pairwise distinct lengths they drift out of phase with each
//! other as the text progresses, lengthening the effective period.
//!
//! S-Vig is a classical substitution cipher and is **not**
//! cryptographically secure; the design goal is a deterministic,
//! invertible multi-key character transform.
//!
//! # Architecture
//!
//! ```text
//! Validator    (precondition checks on keys and subkey count)
//!     ↓
//! KeyExpander  (raw key cycled to the fixed per-index target length)
//!     ↓
//! Keystream    (composite shift from all subkeys at a letter ordinal)
//!     ↓
//! Engine       (case-preserving walk over the text, letters only)
//! ```
//!
//! All stages are pure functions of their inputs; nothing is cached or
//! shared between calls, so concurrent callers need no coordination.
//!
//! # Examples
//!
//! Encrypt and decrypt a text:
//!
//! ```
//! let keys = ["ab", "cde", "fghij", "zyx"];
//!
//! let ciphertext = svig::encrypt("aaaa aaaa", &keys, 4).unwrap();
//! assert_eq!(ciphertext, "giik khhk");
//!
//! let plaintext = svig::decrypt(&ciphertext, &keys, 4).unwrap();
//! assert_eq!(plaintext, "aaaa aaaa");
//! ```
//!
//! Non-letters pass through untouched and letter case survives:
//!
//! ```
//! let keys = ["key", "word"];
//! let out = svig::encrypt("Attack at dawn, 06:00!", &keys, 2).unwrap();
//! let back = svig::decrypt(&out, &keys, 2).unwrap();
//! assert_eq!(back, "Attack at dawn, 06:00!");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod normalize;

mod alphabet;
mod engine;
mod key_schedule;
mod keystream;

pub use engine::{decrypt, encrypt, DEFAULT_SUBKEY_COUNT};
