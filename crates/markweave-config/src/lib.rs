use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults for the converter front-end. All fields are optional in the
/// TOML file; a missing config file is not an error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Wrap output in a full `<html><head></head><body>…</body></html>` page.
    #[serde(default)]
    pub full_page: bool,
    /// Directory where rendered `.html` files land when no explicit output
    /// path is given on the command line.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured output dir
        if let Some(dir) = config.output_dir.take() {
            config.output_dir = Some(Self::expand_path(&dir).unwrap_or(dir));
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Default config location: `~/.config/markweave/config.toml`.
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home)
            .join(".config")
            .join("markweave")
            .join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let raw = path.to_str()?;
        let expanded = shellexpand::full(raw).ok()?;
        Some(PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn loads_fields_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "full_page = true\noutput_dir = \"/tmp/out\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert!(config.full_page);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert!(!config.full_page);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "full_page = maybe").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn tilde_in_output_dir_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_dir = \"~/html\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        let expanded = config.output_dir.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
