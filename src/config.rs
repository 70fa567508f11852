use crate::errors::{FileOperation, IoError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(cotree::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(cotree::config::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults read from an optional `--config` file. Command line flags take precedence.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base path entries are created under.
    pub output: Option<PathBuf>,
    /// Always print the planned tree before creating it.
    pub preview: bool,
    /// Always ask before creating anything.
    pub confirm: bool,
}
impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed: Config = toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })?;

        log::debug!("loaded config from {}: {:?}", path.display(), parsed);

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cotree.toml");
        fs::write(&path, "output = \"scaffold\"\npreview = true\nconfirm = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(
            config,
            Config {
                output: Some(PathBuf::from("scaffold")),
                preview: true,
                confirm: true,
            }
        );
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cotree.toml");
        fs::write(&path, "preview = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.output, None);
        assert!(config.preview);
        assert!(!config.confirm);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cotree.toml");
        fs::write(&path, "indent = 2\n").unwrap();

        let error = Config::from_file(&path).unwrap_err();

        assert!(matches!(error, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempfile::tempdir().unwrap();

        let error = Config::from_file(tmp.path().join("nope.toml")).unwrap_err();

        assert!(matches!(error, ConfigError::Io(_)));
    }
}
