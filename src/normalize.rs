//! Text canonicalization helpers.
//!
//! Folds common visual variants of letters (diacritics and leetspeak
//! substitutions) down to their plain lowercase ASCII form and drops
//! everything that is not alphanumeric. Useful for canonicalizing text
//! before keying or comparison; the cipher itself never calls this and
//! still transforms ASCII letters only.

/// Folds `c` to its plain variant, or `None` if `c` has no entry in the
/// variant table.
///
/// Covers diacritics (`à` → `a`, `ñ` → `n`), leetspeak digits and
/// symbols (`4`/`@` → `a`, `1`/`!` → `i`, `0` → `o`), and
/// superscript/subscript digits (`²`/`₂` → `2`).
fn fold(c: char) -> Option<char> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | '4' | '@' => 'a',
        'ç' => 'c',
        'ð' => 'd',
        'è' | 'é' | 'ë' | 'ê' | 'œ' | 'æ' | '3' => 'e',
        'ì' | 'í' | 'î' | 'ï' | '1' | '!' => 'i',
        'ǹ' | 'ń' | 'ñ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | '0' => 'o',
        '5' | 'ß' => 's',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '⁰' | '₀' => '0',
        '¹' | '₁' => '1',
        '²' | '₂' => '2',
        '³' | '₃' => '3',
        '⁴' | '₄' => '4',
        '⁵' | '₅' => '5',
        '⁶' | '₆' => '6',
        '⁷' | '₇' => '7',
        '⁸' | '₈' => '8',
        '⁹' | '₉' => '9',
        _ => return None,
    })
}

/// Returns a lowercased copy of `text` with diacritic and leetspeak
/// variants folded to plain ASCII and all other non-alphanumerics
/// removed.
///
/// Characters are lowercased first, so `'Ä'` folds the same way as
/// `'ä'`. Alphanumerics without a variant entry are kept lowercased;
/// punctuation and whitespace are dropped.
///
/// # Examples
///
/// ```
/// use svig::normalize::fold_variants;
///
/// assert_eq!(fold_variants("Crème brûlée"), "cremebrulee");
/// assert_eq!(fold_variants("h4x0r sp34k!"), "haxorspeaki");
/// assert_eq!(fold_variants("E = mc²"), "emc2");
/// ```
pub fn fold_variants(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        for lowered in c.to_lowercase() {
            if let Some(folded) = fold(lowered) {
                output.push(folded);
            } else if lowered.is_alphanumeric() {
                output.push(lowered);
            }
        }
    }
    output
}
