//! Locale-style string ordering.
//!
//! Approximates the primary ordering of the Unicode root collation that
//! browsers use for `localeCompare`: whitespace sorts first, then
//! punctuation and symbols in collation order, then digits, then letters
//! compared case-insensitively by base letter. Accents only break ties
//! between strings with the same base letters, and anything still equal
//! falls back to code-point order so the comparison stays total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation and symbols in root collation order.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight class of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Symbol,
    Digit,
    Letter,
}

fn weight(c: char) -> (Class, u32) {
    if c.is_whitespace() {
        (Class::Space, 0)
    } else if c.is_numeric() {
        (Class::Digit, c.to_digit(10).unwrap_or(u32::from(c)))
    } else if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (Class::Letter, u32::from(folded))
    } else {
        let rank = SYMBOL_ORDER
            .find(c)
            .and_then(|i| u32::try_from(i).ok())
            // Unlisted symbols sort after the listed ones, by code point.
            .unwrap_or_else(|| 0x100 + u32::from(c));
        (Class::Symbol, rank)
    }
}

/// Compare two strings the way the table sorts its columns.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| a.cmp(b))
}

/// Weights of the base characters, with combining marks stripped.
fn primary(s: &str) -> impl Iterator<Item = (Class, u32)> + '_ {
    s.nfd().filter(|&c| !is_combining_mark(c)).map(weight)
}

/// Case-folded decomposition, so an unaccented letter sorts before its
/// accented forms.
fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
