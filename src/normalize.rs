//! Diacritic stripping and special character substitution.

use crate::table::Table;
use std::borrow::Cow;
use unicode_normalization::{
    char::{decompose_canonical, is_combining_mark},
    UnicodeNormalization,
};

impl Table {
    /// Strip diacritics from text and substitute characters that have a table entry.
    ///
    /// The text is canonically composed first, so equivalent spellings of the same text give
    /// the same result. Then characters with an entry of their own are replaced directly.
    /// Every other character is canonically decomposed, its combining marks are dropped, and
    /// what remains is looked up again, falling back to the character itself. Characters this
    /// can't reduce to ASCII (CJK, emoji, ...) are kept as they are.
    pub fn strip_diacritics<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_ascii() {
            return text.into();
        }

        text.nfc()
            .fold(String::with_capacity(text.len()), |mut out, c| {
                if let Some(rep) = self.lookup(c) {
                    out.push_str(rep);
                    return out;
                }
                decompose_canonical(c, |d| {
                    if is_combining_mark(d) {
                        return;
                    }
                    match self.lookup(d) {
                        Some(rep) => out.push_str(rep),
                        None => out.push(d),
                    }
                });
                out
            })
            .into()
    }
}

/// Strip diacritics and substitute special characters using the built-in table.
///
/// # Examples
///
/// ```rust
/// # use asciifold::strip_diacritics;
/// assert_eq!("Sao Paulo", strip_diacritics("São Paulo"));
/// assert_eq!("Strasse", strip_diacritics("Straße"));
/// assert_eq!("成田市", strip_diacritics("成田市"));
/// ```
pub fn strip_diacritics(text: &str) -> Cow<str> {
    Table::global().strip_diacritics(text)
}

/// Like `strip_diacritics`, but passes an absent input through as absent.
///
/// # Examples
///
/// ```rust
/// # use asciifold::strip_diacritics_opt;
/// assert_eq!(None, strip_diacritics_opt(None));
/// assert_eq!(Some("AEro".into()), strip_diacritics_opt(Some("Ærø")));
/// ```
pub fn strip_diacritics_opt(text: Option<&str>) -> Option<Cow<str>> {
    text.map(strip_diacritics)
}
