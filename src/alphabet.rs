//! Letter-value and case modelling for the cipher alphabet.
//!
//! Uppercase and lowercase letters share a single 0-25 value space; the
//! case travels alongside the value as a separate flag so the transform
//! never branches on ASCII ranges beyond the initial classification.

/// Number of letters in the cipher alphabet.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// Case of a letter, preserved independently per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    Upper,
    Lower,
}

/// A single letter as a 0-25 alphabet value plus its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Letter {
    value: u8,
    case: Case,
}

impl Letter {
    /// Classifies a character, returning `None` for non-letters.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(Letter {
                value: c as u8 - b'a',
                case: Case::Lower,
            }),
            'A'..='Z' => Some(Letter {
                value: c as u8 - b'A',
                case: Case::Upper,
            }),
            _ => None,
        }
    }

    /// Shifts the letter forward by `shift` positions, wrapping at 26.
    /// The case is unchanged.
    pub(crate) fn shifted(self, shift: u8) -> Self {
        Letter {
            value: (self.value + shift % ALPHABET_LEN) % ALPHABET_LEN,
            case: self.case,
        }
    }

    /// Shifts the letter backward by `shift` positions, wrapping at 26.
    /// Exact inverse of [`shifted`](Self::shifted) for the same shift.
    pub(crate) fn unshifted(self, shift: u8) -> Self {
        Letter {
            value: (self.value + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN,
            case: self.case,
        }
    }

    /// Maps the letter back to a character of its original case.
    pub(crate) fn to_char(self) -> char {
        let base = match self.case {
            Case::Upper => b'A',
            Case::Lower => b'a',
        };
        (base + self.value) as char
    }
}
