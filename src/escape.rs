//! Escaping of non-ASCII characters into a textual form.

use serde::Deserialize;
use std::{borrow::Cow, convert::TryFrom, fmt, fmt::Write, str::FromStr};

/// How a non-ASCII code point is rendered.
///
/// Escapes always use the full code point, so characters outside the Basic Multilingual Plane
/// get more than four hex digits rather than a surrogate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum EscapeMode {
    /// A decimal HTML character reference, `&#223;`.
    Html,

    /// A Unicode escape, `\u00DF`.
    Unicode,

    /// A hex literal, `0x00DF`.
    Hex,
}

impl EscapeMode {
    /// Get an escaped representation of a single character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use asciifold::EscapeMode;
    /// assert_eq!("&#223;", EscapeMode::Html.escape('ß').to_string());
    /// assert_eq!("\\u00DF", EscapeMode::Unicode.escape('ß').to_string());
    /// assert_eq!("0x1F525", EscapeMode::Hex.escape('🔥').to_string());
    /// ```
    pub fn escape(self, c: char) -> Escaped {
        Escaped { mode: self, c }
    }

    /// The lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Unicode => "unicode",
            Self::Hex => "hex",
        }
    }
}

impl Default for EscapeMode {
    fn default() -> Self {
        Self::Html
    }
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EscapeMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Html, Self::Unicode, Self::Hex]
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidModeError(s.into()))
    }
}

impl TryFrom<String> for EscapeMode {
    type Error = InvalidModeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A single escaped character, rendered through `Display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escaped {
    mode: EscapeMode,
    c: char,
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = u32::from(self.c);
        match self.mode {
            EscapeMode::Html => write!(f, "&#{};", code),
            EscapeMode::Unicode => write!(f, "\\u{:04X}", code),
            EscapeMode::Hex => write!(f, "0x{:04X}", code),
        }
    }
}

/// An unrecognized escape mode name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidModeError(pub String);

impl fmt::Display for InvalidModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid mode {:?}, use 'html', 'unicode', or 'hex'",
            self.0
        )
    }
}

impl std::error::Error for InvalidModeError {}

/// Escape every non-ASCII character in the text with the given mode.
///
/// ASCII characters, `&` included, are kept as they are. Escaping its own output changes
/// nothing, and the output can't be told apart from input that already held an escape.
///
/// # Examples
///
/// ```rust
/// # use asciifold::{escape_with, EscapeMode};
/// assert_eq!("Stra0x00DFe", escape_with("Straße", EscapeMode::Hex));
/// ```
pub fn escape_with(text: &str, mode: EscapeMode) -> Cow<str> {
    if text.is_ascii() {
        return text.into();
    }

    text.chars()
        .fold(String::with_capacity(text.len() * 2), |mut out, c| {
            if c.is_ascii() {
                out.push(c);
            } else {
                // Writing to a `String` can't fail.
                let _ = write!(out, "{}", mode.escape(c));
            }
            out
        })
        .into()
}

/// Escape every non-ASCII character in the text as an HTML character reference.
///
/// # Examples
///
/// ```rust
/// # use asciifold::escape_non_ascii;
/// assert_eq!("&#25104;&#30000;&#24066;", escape_non_ascii("成田市"));
/// assert_eq!("plain", escape_non_ascii("plain"));
/// ```
pub fn escape_non_ascii(text: &str) -> Cow<str> {
    escape_with(text, EscapeMode::Html)
}

/// Escape every non-ASCII character in the text with a mode given by name.
///
/// The name is matched case-insensitively. An unknown name is an error even if the text is
/// pure ASCII.
///
/// # Examples
///
/// ```rust
/// # use asciifold::escape_by_mode;
/// assert_eq!("\\u00DF", escape_by_mode("ß", "Unicode")?);
/// assert!(escape_by_mode("ß", "base64").is_err());
/// # Ok::<(), asciifold::InvalidModeError>(())
/// ```
pub fn escape_by_mode<'a>(text: &'a str, mode: &str) -> Result<Cow<'a, str>, InvalidModeError> {
    let mode = mode.parse()?;
    Ok(escape_with(text, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip_diacritics;
    use quickcheck_macros::quickcheck;

    fn is_borrowed(cow: Cow<str>) -> bool {
        match cow {
            Cow::Borrowed(_) => true,
            Cow::Owned(_) => false,
        }
    }

    #[test]
    fn html_mode_uses_decimal() {
        assert_eq!(escape_by_mode("ß", "html").unwrap(), "&#223;");
    }

    #[test]
    fn unicode_mode_uses_padded_uppercase_hex() {
        assert_eq!(escape_by_mode("ß", "unicode").unwrap(), "\\u00DF");
    }

    #[test]
    fn hex_mode_uses_padded_uppercase_hex() {
        assert_eq!(escape_by_mode("ß", "hex").unwrap(), "0x00DF");
    }

    #[test]
    fn modes_are_case_insensitive() {
        assert_eq!(escape_by_mode("é", "HTML").unwrap(), "&#233;");
        assert_eq!(escape_by_mode("é", "Hex").unwrap(), "0x00E9");
        assert_eq!(escape_by_mode("é", "uNiCoDe").unwrap(), "\\u00E9");
    }

    #[test]
    fn invalid_mode_is_an_error() {
        assert_eq!(
            escape_by_mode("ß", "base64"),
            Err(InvalidModeError("base64".into()))
        );
    }

    #[test]
    fn invalid_mode_is_an_error_for_ascii() {
        assert!(escape_by_mode("plain", "").is_err());
    }

    #[test]
    fn supplementary_characters_use_the_full_code_point() {
        assert_eq!(escape_with("😀", EscapeMode::Html), "&#128512;");
        assert_eq!(escape_with("😀", EscapeMode::Unicode), "\\u1F600");
        assert_eq!(escape_with("😀", EscapeMode::Hex), "0x1F600");
    }

    #[test]
    fn ascii_is_kept_between_escapes() {
        assert_eq!(escape_non_ascii("a→b"), "a&#8594;b");
    }

    #[test]
    fn latin_1_range_is_escaped() {
        assert_eq!(escape_non_ascii("\u{0080}\u{00FF}"), "&#128;&#255;");
    }

    #[test]
    fn cjk_is_escaped_per_character() {
        assert_eq!(escape_non_ascii("堺市"), "&#22586;&#24066;");
    }

    #[test]
    fn escaping_is_not_reversible() {
        let once = escape_non_ascii("ß");
        assert_eq!(escape_non_ascii(&once), once);
        assert_eq!(escape_non_ascii("&#223;"), once);
    }

    #[test]
    fn ascii_is_borrowed() {
        assert!(is_borrowed(escape_non_ascii("hello")));
    }

    #[test]
    fn mode_parses_from_its_name() {
        for mode in &[EscapeMode::Html, EscapeMode::Unicode, EscapeMode::Hex] {
            assert_eq!(mode.to_string().parse::<EscapeMode>(), Ok(*mode));
        }
    }

    #[test]
    fn mode_deserializes_case_insensitively() {
        let mode: EscapeMode = serde_yaml::from_str("HEX").unwrap();
        assert_eq!(mode, EscapeMode::Hex);
        assert!(serde_yaml::from_str::<EscapeMode>("octal").is_err());
    }

    #[test]
    fn stripped_names_escape_to_ascii() {
        let cases = &[
            ("Sørensen", "Sorensen"),
            ("Straße", "Strasse"),
            ("São Paulo", "Sao Paulo"),
            ("Montréal", "Montreal"),
            ("Yücetürk", "Yuceturk"),
            ("成田市", "&#25104;&#30000;&#24066;"),
        ];
        for (input, output) in cases {
            assert_eq!(escape_non_ascii(&strip_diacritics(input)), *output);
        }
    }

    #[quickcheck]
    fn ascii_is_unchanged(s: String) -> bool {
        let s = s.chars().filter(char::is_ascii).collect::<String>();
        escape_non_ascii(&s) == s
    }

    #[quickcheck]
    fn output_is_ascii(s: String) -> bool {
        escape_with(&s, EscapeMode::Html).is_ascii()
            && escape_with(&s, EscapeMode::Unicode).is_ascii()
            && escape_with(&s, EscapeMode::Hex).is_ascii()
    }
}
