//! Input configuration: where the synset and hypernym tables live.
//!
//! Loaded from TOML, for example:
//!
//! ```toml
//! synsets = "data/synsets.txt"
//! hypernyms = "data/hypernyms.txt"
//! ```
//!
//! Relative paths in a config file resolve against the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Locations of the two WordNet tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetConfig {
    /// Synset table: `id,nouns[,gloss]` per row.
    #[serde(default)]
    pub synsets: Option<PathBuf>,
    /// Hypernym table: `id,parent,...` per row.
    #[serde(default)]
    pub hypernyms: Option<PathBuf>,
}

impl WordNetConfig {
    pub fn new(synsets: impl Into<PathBuf>, hypernyms: impl Into<PathBuf>) -> Self {
        Self {
            synsets: Some(synsets.into()),
            hypernyms: Some(hypernyms.into()),
        }
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    /// Replace configured paths with any that are given explicitly.
    pub fn with_overrides(mut self, synsets: Option<PathBuf>, hypernyms: Option<PathBuf>) -> Self {
        if synsets.is_some() {
            self.synsets = synsets;
        }
        if hypernyms.is_some() {
            self.hypernyms = hypernyms;
        }
        self
    }

    /// Both table paths, or an error naming the one that is missing.
    pub fn tables(&self) -> ConfigResult<(&Path, &Path)> {
        let synsets = self
            .synsets
            .as_deref()
            .ok_or(ConfigError::MissingInput { which: "synsets" })?;
        let hypernyms = self
            .hypernyms
            .as_deref()
            .ok_or(ConfigError::MissingInput { which: "hypernyms" })?;
        Ok((synsets, hypernyms))
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            synsets: self.synsets.map(resolve),
            hypernyms: self.hypernyms.map(resolve),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("wordnet.toml");
        std::fs::write(
            &path,
            "synsets = \"synsets.txt\"\nhypernyms = \"/abs/hypernyms.txt\"\n",
        )
        .unwrap();

        let config = WordNetConfig::load(&path).unwrap();
        assert_eq!(config.synsets, Some(dir.path().join("synsets.txt")));
        assert_eq!(config.hypernyms, Some(PathBuf::from("/abs/hypernyms.txt")));
    }

    #[test]
    fn overrides_win() {
        let config = WordNetConfig::new("a", "b").with_overrides(Some("c".into()), None);
        let (synsets, hypernyms) = config.tables().unwrap();
        assert_eq!(synsets, Path::new("c"));
        assert_eq!(hypernyms, Path::new("b"));
    }

    #[test]
    fn missing_table_reported() {
        let config = WordNetConfig::default().with_overrides(Some("s".into()), None);
        assert!(matches!(
            config.tables(),
            Err(ConfigError::MissingInput { which: "hypernyms" })
        ));
    }

    #[test]
    fn invalid_toml_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "synsets = [").unwrap();
        assert!(matches!(
            WordNetConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_rejected() {
        assert!(matches!(
            WordNetConfig::load(Path::new("/nonexistent/wordnet.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
