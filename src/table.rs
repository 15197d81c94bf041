//! The code point substitution table.

mod data;

use once_cell::sync::Lazy;
use std::{
    borrow::Cow,
    collections::{hash_map::Entry, HashMap},
    fmt,
};

static GLOBAL: Lazy<Table> = Lazy::new(Table::builtin);

/// An immutable mapping from single code points to ASCII replacements.
///
/// A replacement may be empty, which deletes the character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    map: HashMap<char, Cow<'static, str>>,
}

impl Table {
    /// Build a new table holding the built-in entries.
    pub fn builtin() -> Self {
        let map = data::MAPPINGS
            .iter()
            .map(|&(c, rep)| (c, Cow::Borrowed(rep)))
            .collect();
        Self { map }
    }

    /// Get the shared built-in table.
    ///
    /// The table is built on first use and never changes afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use asciifold::Table;
    /// assert_eq!(Some("ss"), Table::global().lookup('ß'));
    /// assert_eq!(None, Table::global().lookup('成'));
    /// ```
    pub fn global() -> &'static Table {
        &GLOBAL
    }

    /// Look up the replacement for a code point.
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(AsRef::as_ref)
    }

    /// Returns if the table has an entry for a code point.
    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over every `(code point, replacement)` entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.map.iter().map(|(&c, rep)| (c, rep.as_ref()))
    }

    /// Create a table with additional entries.
    ///
    /// An entry that repeats an existing mapping exactly is accepted. Any entry that would
    /// change an existing mapping, map an ASCII character, or produce non-ASCII output is
    /// rejected, and no table is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use asciifold::Table;
    /// let table = Table::builtin().with_entries(vec![('‰', "permille")])?;
    /// assert_eq!(Some("permille"), table.lookup('‰'));
    /// assert!(Table::builtin().with_entries(vec![('ß', "sz")]).is_err());
    /// # Ok::<(), asciifold::table::TableError>(())
    /// ```
    pub fn with_entries<I, S>(mut self, entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        for (c, rep) in entries {
            let rep: String = rep.into();
            if c.is_ascii() {
                return Err(TableError::AsciiKey(c));
            }
            if !rep.is_ascii() {
                return Err(TableError::NonAsciiReplacement(c, rep));
            }
            match self.map.entry(c) {
                Entry::Occupied(existing) if *existing.get() == rep => {}
                Entry::Occupied(existing) => {
                    return Err(TableError::Conflict {
                        key: c,
                        existing: existing.get().clone().into_owned(),
                        replacement: rep,
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(rep.into());
                }
            }
        }
        Ok(self)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::builtin()
    }
}

/// An error when extending a `Table`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The key is an ASCII character, which never needs a replacement.
    AsciiKey(char),

    /// The replacement contains non-ASCII characters.
    NonAsciiReplacement(char, String),

    /// The key already maps to a different replacement.
    Conflict {
        key: char,
        existing: String,
        replacement: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AsciiKey(c) => write!(f, "{:?} is ASCII and can't be remapped", c),
            Self::NonAsciiReplacement(c, rep) => {
                write!(f, "replacement {:?} for {:?} isn't ASCII", rep, c)
            }
            Self::Conflict {
                key,
                existing,
                replacement,
            } => write!(
                f,
                "{:?} already maps to {:?}, can't map it to {:?}",
                key, existing, replacement
            ),
        }
    }
}

impl std::error::Error for TableError {}
