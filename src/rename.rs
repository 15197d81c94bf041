//! Renaming files and folders to ASCII, file safe names.

use crate::{
    utils::{file_safe, tidy},
    Converter,
};
use rayon::prelude::*;
use std::{
    ffi::OsStr,
    fmt, fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A single planned rename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Rename {
    /// Perform the rename.
    ///
    /// An existing file or folder at the target is never overwritten.
    pub fn apply(&self) -> Result<(), RenameError> {
        if self.to.exists() {
            return Err(RenameError::TargetExists(self.to.clone()));
        }
        fs::rename(&self.from, &self.to)?;
        debug!(from = %self.from.display(), to = %self.to.display(), "renamed");
        Ok(())
    }
}

/// Get the ASCII, file safe version of a single file name.
///
/// # Examples
///
/// ```rust
/// # use asciifold::{rename::ascii_file_name, Converter};
/// let converter = Converter::default();
/// assert_eq!("Blabaer - Ost.txt", ascii_file_name("Blåbær: Øst.txt", &converter));
/// ```
pub fn ascii_file_name(name: &str, converter: &Converter) -> String {
    let converted = converter.convert(name);
    let tidied = tidy(&converted);
    file_safe(&tidied).into_owned()
}

/// Plan renames for everything under a folder, not including the folder itself.
///
/// The renames are ordered so that a folder's contents come before the folder, meaning they
/// can be applied one after another using the original paths.
pub fn plan<P: AsRef<Path>>(root: P, converter: &Converter) -> Result<Vec<Rename>, RenameError> {
    let entries = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let renames = entries
        .into_par_iter()
        .filter_map(|entry| {
            let from = entry.into_path();
            let name = match from.file_name().and_then(OsStr::to_str) {
                Some(name) => name,
                None => {
                    warn!(path = %from.display(), "skipping name that isn't UTF-8");
                    return None;
                }
            };

            let new_name = ascii_file_name(name, converter);
            if new_name == name {
                return None;
            }
            if new_name.is_empty() {
                warn!(path = %from.display(), "skipping name with no ASCII equivalent");
                return None;
            }

            let to = from.with_file_name(new_name);
            Some(Rename { from, to })
        })
        .collect::<Vec<_>>();

    debug!(count = renames.len(), "planned renames");
    Ok(renames)
}

/// An error when planning or applying a rename.
#[derive(Debug)]
pub enum RenameError {
    /// The folder couldn't be walked.
    Walk(walkdir::Error),

    /// Something already exists at the target path.
    TargetExists(PathBuf),

    /// The rename itself failed.
    Io(io::Error),
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Walk(_) => write!(f, "couldn't read folder"),
            Self::TargetExists(path) => write!(f, "\"{}\" already exists", path.display()),
            Self::Io(_) => write!(f, "couldn't rename"),
        }
    }
}

impl std::error::Error for RenameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Walk(err) => Some(err),
            Self::TargetExists(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for RenameError {
    fn from(err: walkdir::Error) -> Self {
        Self::Walk(err)
    }
}

impl From<io::Error> for RenameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
