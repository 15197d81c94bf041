use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Collapse runs of whitespace into a single space and trim both ends.
///
/// # Examples
///
/// ```rust
/// # use asciifold::utils::tidy;
/// assert_eq!("a b c", tidy("  a  b\t\tc "));
/// assert_eq!("a\tb", tidy("a\tb"));
/// ```
pub fn tidy(text: &str) -> Cow<str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"\s{2,}").unwrap();
    }
    match RE.replace_all(text, " ") {
        Cow::Borrowed(text) => text.trim().into(),
        Cow::Owned(text) => text.trim().to_owned().into(),
    }
}

/// Get a version of some text safe to use in filenames.
///
/// Characters that aren't usable in one or more operating system filenames are replaced
/// with file safe variants, or removed.
///
/// # Examples
///
/// ```rust
/// # use asciifold::utils::file_safe;
/// assert_eq!("foo - [bar]", file_safe("foo: <bar>?"));
/// ```
pub fn file_safe(text: &str) -> Cow<str> {
    if !text.chars().any(|c| file_safe_replacement(c).is_some()) {
        return text.into();
    }
    let mut buf = String::with_capacity(text.len());
    for c in text.chars() {
        match file_safe_replacement(c) {
            Some(rep) => buf.push_str(rep),
            None => buf.push(c),
        }
    }
    buf.into()
}

/// The replacement for a character that can't be used in a filename on at least one common
/// operating system, or `None` if the character is safe.
fn file_safe_replacement(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("["),
        '>' => Some("]"),
        ':' => Some(" -"),
        '"' => Some("'"),
        '/' | '|' | '~' => Some("-"),
        '\\' | '*' => Some("_"),
        '?' => Some(""),
        _ => None,
    }
}
