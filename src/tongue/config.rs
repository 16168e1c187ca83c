use crate::error::{Result, TongueError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "collection.json";
const CONFIG_DIR_ENV: &str = "TONGUE_CONFIG_DIR";

/// Configuration for tongue, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TongueConfig {
    /// Collection file used when `--file` is not given. A relative path is
    /// taken relative to the config directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl TongueConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TongueError::Io)?;
        let mut config: TongueConfig =
            serde_json::from_str(&content).map_err(TongueError::Serialization)?;
        if let Some(file) = config.file.take() {
            config.file = Some(config_dir.join(file));
        }
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// The collection file to use: an explicit path wins over the configured
    /// one, which wins over `collection.json` in the working directory.
    pub fn resolve_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
    }
}

/// Directory holding `config.json`.
///
/// `$TONGUE_CONFIG_DIR` overrides the platform config directory. Returns `None`
/// when neither is available.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tongue", "tongue").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = TongueConfig::default();
        assert_eq!(config.resolve_file(None), PathBuf::from("collection.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TongueConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, TongueConfig::default());
    }

    #[test]
    fn test_absolute_file_is_kept() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"file": "/data/italian.json"}"#);

        let loaded = TongueConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.file, Some(PathBuf::from("/data/italian.json")));
    }

    #[test]
    fn test_relative_file_is_relative_to_config_dir() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), r#"{"file": "italian.json"}"#);

        let loaded = TongueConfig::load(temp.path()).unwrap();
        assert_eq!(
            loaded.resolve_file(None),
            temp.path().join("italian.json")
        );
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "{}");

        let loaded = TongueConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, TongueConfig::default());
        assert_eq!(loaded.resolve_file(None), PathBuf::from("collection.json"));
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "file = 3");

        assert!(matches!(
            TongueConfig::load(temp.path()),
            Err(TongueError::Serialization(_))
        ));
    }

    #[test]
    fn test_explicit_file_wins() {
        let config = TongueConfig {
            file: Some(PathBuf::from("configured.json")),
        };
        assert_eq!(
            config.resolve_file(Some(PathBuf::from("flag.json"))),
            PathBuf::from("flag.json")
        );
        assert_eq!(config.resolve_file(None), PathBuf::from("configured.json"));
    }
}
