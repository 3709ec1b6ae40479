//! Error types for the S-Vig library.

use std::fmt;

/// Errors produced by the S-Vig library.
///
/// Every variant is an invalid-argument condition detected before any
/// transformation runs; with valid inputs the transform itself cannot
/// fail, so there is never partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvigError {
    /// The requested subkey count is zero.
    ZeroSubkeyCount,
    /// Fewer keys were supplied than the requested subkey count.
    InsufficientKeys {
        /// Number of keys the subkey count requires.
        required: usize,
        /// Number of keys actually supplied.
        supplied: usize,
    },
    /// A participating key is empty.
    EmptyKey {
        /// 0-based position of the offending key.
        index: usize,
    },
    /// A participating key contains a character outside `a`-`z`.
    InvalidKeyChar {
        /// 0-based position of the offending key.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl fmt::Display for SvigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvigError::ZeroSubkeyCount => {
                write!(f, "Subkey count must be at least 1")
            }
            SvigError::InsufficientKeys { required, supplied } => {
                write!(f, "Subkey count {required} exceeds the {supplied} supplied keys")
            }
            SvigError::EmptyKey { index } => {
                write!(f, "Key at index {index} is empty")
            }
            SvigError::InvalidKeyChar { index, ch } => {
                write!(
                    f,
                    "Key at index {index} contains {ch:?}; keys must be lowercase ASCII letters"
                )
            }
        }
    }
}

impl std::error::Error for SvigError {}
