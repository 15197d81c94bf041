//! End-to-end conversion of text to ASCII.

use crate::{escape::escape_with, table::Table, utils::tidy, EscapeMode};
use rayon::prelude::*;
use std::borrow::Cow;

/// A configured conversion from arbitrary text to ASCII.
///
/// By default text is stripped of diacritics with the table, then whatever is left is escaped
/// as HTML character references.
#[derive(Clone, Copy, Debug)]
pub struct Converter<'t> {
    table: &'t Table,
    mode: EscapeMode,
    strip: bool,
    tidy: bool,
}

impl<'t> Converter<'t> {
    /// Create a converter using a table, with the default settings.
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            mode: EscapeMode::default(),
            strip: true,
            tidy: false,
        }
    }

    /// Set the mode used to escape characters the table doesn't cover.
    pub fn with_mode(mut self, mode: EscapeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether diacritics are stripped and table substitutions applied before escaping.
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Set whether whitespace is collapsed and trimmed after conversion.
    pub fn with_tidy(mut self, tidy: bool) -> Self {
        self.tidy = tidy;
        self
    }

    /// Convert text to ASCII.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use asciifold::{Converter, EscapeMode, Table};
    /// let converter = Converter::new(Table::global()).with_mode(EscapeMode::Hex);
    /// assert_eq!("Sao Paulo 0x5E02", converter.convert("São Paulo 市"));
    /// ```
    pub fn convert<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let stripped = if self.strip {
            self.table.strip_diacritics(text)
        } else {
            text.into()
        };
        let escaped = reborrow(stripped, |s| escape_with(s, self.mode));
        if self.tidy {
            reborrow(escaped, tidy)
        } else {
            escaped
        }
    }

    /// Convert every line of some text, in parallel.
    ///
    /// Lines are returned in their original order, without line terminators.
    pub fn convert_lines(&self, text: &str) -> Vec<String> {
        text.par_lines()
            .map(|line| self.convert(line).into_owned())
            .collect()
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new(Table::global())
    }
}

/// Apply a borrowing transformation to a cow, keeping it borrowed if both stages borrow.
fn reborrow<'a, F>(cow: Cow<'a, str>, f: F) -> Cow<'a, str>
where
    F: for<'b> Fn(&'b str) -> Cow<'b, str>,
{
    match cow {
        Cow::Borrowed(s) => f(s),
        Cow::Owned(s) => f(&s).into_owned().into(),
    }
}

/// Convert text to ASCII with the built-in table, escaping what's left as HTML.
///
/// # Examples
///
/// ```rust
/// # use asciifold::to_ascii;
/// assert_eq!("Sorensen", to_ascii("Sørensen"));
/// assert_eq!("&#22586;&#24066;", to_ascii("堺市"));
/// ```
pub fn to_ascii(text: &str) -> Cow<str> {
    Converter::default().convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn is_borrowed(cow: Cow<str>) -> bool {
        match cow {
            Cow::Borrowed(_) => true,
            Cow::Owned(_) => false,
        }
    }

    macro_rules! to_ascii_tests {
        ($( $name:ident($input:expr, $output:expr); )* ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(to_ascii($input), $output);
                }
            )*
        }
    }

    to_ascii_tests! {
        sorensen("Sørensen", "Sorensen");
        aero("Ærø", "AEro");
        blabaer("Blåbær", "Blabaer");
        strasse("Straße", "Strasse");
        francois("François", "Francois");
        yuceturk("Yücetürk", "Yuceturk");
        narita("成田市", "&#25104;&#30000;&#24066;");
        guzelbahce("Güzelbahçe", "Guzelbahce");
        sakai("堺市", "&#22586;&#24066;");
        sao_paulo("São Paulo", "Sao Paulo");
        dusseldorf("Düsseldorf", "Dusseldorf");
        montreal("Montréal", "Montreal");
        iwakuni("Iwakuni–shi", "Iwakuni-shi");
        thorlakshofn("Þorlákshöfn", "Thorlakshofn");
    }

    #[test]
    fn mode_is_used_for_leftovers() {
        let converter = Converter::default().with_mode(EscapeMode::Unicode);
        assert_eq!(converter.convert("Straße 市"), "Strasse \\u5E02");
    }

    #[test]
    fn without_strip_everything_is_escaped() {
        let converter = Converter::default().with_strip(false);
        assert_eq!(converter.convert("Straße"), "Stra&#223;e");
    }

    #[test]
    fn tidy_collapses_deleted_and_folded_spaces() {
        let converter = Converter::default().with_tidy(true);
        assert_eq!(converter.convert(" a\u{00A0} \u{200B}b "), "a b");
    }

    #[test]
    fn without_tidy_spaces_are_kept() {
        assert_eq!(to_ascii(" a\u{00A0} b "), " a  b ");
    }

    #[test]
    fn ascii_is_borrowed() {
        assert!(is_borrowed(Converter::default().with_tidy(true).convert("a b")));
    }

    #[test]
    fn lines_keep_their_order() {
        let lines = Converter::default().convert_lines("Ærø\nStraße\r\n成\n");
        assert_eq!(lines, vec!["AEro", "Strasse", "&#25104;"]);
    }

    #[test]
    fn lines_of_empty_text_are_empty() {
        assert!(Converter::default().convert_lines("").is_empty());
    }

    #[quickcheck]
    fn output_is_ascii(s: String) -> bool {
        to_ascii(&s).is_ascii()
    }

    #[quickcheck]
    fn ascii_is_unchanged(s: String) -> bool {
        let s = s.chars().filter(char::is_ascii).collect::<String>();
        to_ascii(&s) == s
    }

    #[quickcheck]
    fn lines_match_single_conversions(s: String) -> bool {
        let s = s.replace('\r', "");
        let converter = Converter::default();
        let expected = s
            .lines()
            .map(|line| converter.convert(line).into_owned())
            .collect::<Vec<_>>();
        converter.convert_lines(&s) == expected
    }
}
