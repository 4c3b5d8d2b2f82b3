//! Word masking and guess normalization.

use std::collections::BTreeSet;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Character shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Render `word` with every letter not in `guessed` replaced by [`PLACEHOLDER`].
///
/// Letters are separated by single spaces, so the result is always
/// `2 * len - 1` characters long for a non-empty word.
#[must_use]
pub fn mask(word: &str, guessed: &BTreeSet<char>) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if guessed.contains(&c) { c } else { PLACEHOLDER });
    }
    out
}

/// Whether `c` belongs to one of the Unicode letter categories (`L*`).
///
/// Narrower than [`char::is_alphabetic`], which also admits letter numerals
/// such as `Ⅻ` and combining marks.
#[must_use]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Normalize raw client input into a single lowercase letter.
///
/// Input is lower-cased, then surrounding whitespace is trimmed. Anything
/// that does not leave exactly one letter is rejected.
#[must_use]
pub fn normalize_guess(raw: &str) -> Option<char> {
    let lowered = raw.to_lowercase();
    let mut chars = lowered.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Some(c),
        _ => None,
    }
}
