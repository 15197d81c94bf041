//! Loading conversion settings and extra table entries from YAML.

use crate::{
    table::{Table, TableError},
    EscapeMode,
};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt, fs, io, path::Path, str::FromStr};
use tracing::debug;

/// Conversion settings.
///
/// Every field is optional; unset fields fall back to the command line or the defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The escape mode for characters the table doesn't cover.
    pub mode: Option<EscapeMode>,

    /// Whether whitespace is collapsed after conversion.
    pub tidy: Option<bool>,

    /// Extra table entries, keyed by a single character.
    pub mappings: BTreeMap<char, String>,
}

impl Config {
    /// Load a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = fs::read_to_string(path)?.parse::<Config>()?;
        debug!(
            path = %path.display(),
            mappings = config.mappings.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Build the built-in table extended with this config's mappings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use asciifold::config::Config;
    /// let config: Config = "mappings:\n  \"ñ\": ny\n".parse()?;
    /// assert_eq!(Some("ny"), config.table()?.lookup('ñ'));
    /// # Ok::<(), asciifold::config::ConfigError>(())
    /// ```
    pub fn table(&self) -> Result<Table, ConfigError> {
        let entries = self.mappings.iter().map(|(&c, rep)| (c, rep.as_str()));
        Ok(Table::builtin().with_entries(entries)?)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}

/// An error when loading a `Config`.
#[derive(Debug)]
pub enum ConfigError {
    /// The file couldn't be read.
    Io(io::Error),

    /// The file isn't a valid config.
    Yaml(serde_yaml::Error),

    /// The mappings can't be added to the built-in table.
    Table(TableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(_) => write!(f, "couldn't read config"),
            Self::Yaml(_) => write!(f, "invalid config"),
            Self::Table(_) => write!(f, "invalid mappings"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            Self::Table(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<TableError> for ConfigError {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;
    use std::io::Write;

    #[test]
    fn empty_config_is_default() {
        assert_eq!("".parse::<Config>().unwrap(), Config::default());
    }

    #[test]
    fn full_config_parses() {
        let config = "mode: Hex\ntidy: true\nmappings:\n  \"‰\": permille\n  \"ñ\": ny\n"
            .parse::<Config>()
            .unwrap();
        assert_eq!(config.mode, Some(EscapeMode::Hex));
        assert_eq!(config.tidy, Some(true));
        assert_eq!(config.mappings.get(&'‰').map(String::as_str), Some("permille"));
        assert_eq!(config.mappings.len(), 2);
    }

    #[test]
    fn escaped_keys_parse() {
        let config = "mappings:\n  \"\\u2030\": permille\n".parse::<Config>().unwrap();
        assert!(config.mappings.contains_key(&'‰'));
    }

    #[test]
    fn invalid_mode_is_rejected() {
        assert_matches!("mode: base64".parse::<Config>(), Err(ConfigError::Yaml(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert_matches!("colour: red".parse::<Config>(), Err(ConfigError::Yaml(_)));
    }

    #[test]
    fn multi_character_keys_are_rejected() {
        assert_matches!(
            "mappings:\n  ab: c\n".parse::<Config>(),
            Err(ConfigError::Yaml(_))
        );
    }

    #[test]
    fn table_includes_builtin_entries() {
        let table = "mappings:\n  \"ñ\": ny\n"
            .parse::<Config>()
            .unwrap()
            .table()
            .unwrap();
        assert_eq!(table.lookup('ñ'), Some("ny"));
        assert_eq!(table.lookup('ß'), Some("ss"));
    }

    #[test]
    fn conflicting_mappings_are_rejected() {
        let config = "mappings:\n  \"ß\": sz\n".parse::<Config>().unwrap();
        assert_matches!(
            config.table(),
            Err(ConfigError::Table(TableError::Conflict { key: 'ß', .. }))
        );
    }

    #[test]
    fn config_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tidy: false").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.tidy, Some(false));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            Config::load(dir.path().join("missing.yaml")),
            Err(ConfigError::Io(_))
        );
    }
}
