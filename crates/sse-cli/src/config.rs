//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use sse_runtime::ExplanationDepth;
use std::path::{Path, PathBuf};

/// CLI configuration, read from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Directory holding the profile and tracking stores
    pub store_dir: Option<PathBuf>,

    /// Explanation depth when `--depth` is not given
    pub default_depth: Option<ExplanationDepth>,

    /// Include alternatives when `--alternatives` is not given
    pub include_alternatives: Option<bool>,
}

impl CliConfig {
    /// Load configuration from file; a missing file yields defaults.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(CliConfig::default()),
            },
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Store directory: explicit flag, then config, then the user data dir.
    pub fn resolve_store_dir(&self, flag: Option<&Path>) -> CliResult<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("sse"))
            .ok_or_else(|| CliError::Config("Cannot find data directory; pass --store-dir".into()))
    }

    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.store_dir.is_none());
        assert!(config.default_depth.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "store_dir = \"/tmp/sse-data\"\ndefault_depth = \"deep\"\ninclude_alternatives = true\n",
        )
        .unwrap();
        let config = CliConfig::load(path.to_str()).unwrap();
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/sse-data")));
        assert_eq!(config.default_depth, Some(ExplanationDepth::Deep));
        assert_eq!(config.include_alternatives, Some(true));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_depth = \"verbose\"\n").unwrap();
        assert!(matches!(
            CliConfig::load(path.to_str()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn store_dir_precedence() {
        let config = CliConfig {
            store_dir: Some(PathBuf::from("/from/config")),
            ..CliConfig::default()
        };
        assert_eq!(
            config.resolve_store_dir(Some(Path::new("/from/flag"))).unwrap(),
            PathBuf::from("/from/flag")
        );
        assert_eq!(config.resolve_store_dir(None).unwrap(), PathBuf::from("/from/config"));
    }
}
