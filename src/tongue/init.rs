use crate::api::TongueApi;
use crate::config::{config_dir, TongueConfig};
use crate::error::Result;
use crate::store::fs::FileStore;
use std::path::{Path, PathBuf};

/// Builds the API for one invocation.
///
/// The collection path is `file` if given, otherwise the configured default.
/// A missing config directory means defaults; an unreadable config file is an error.
pub fn initialize(file: Option<PathBuf>) -> Result<TongueApi<FileStore>> {
    initialize_in(config_dir().as_deref(), file)
}

/// Like [`initialize`], but reads the config from `config_dir` when given.
pub fn initialize_in(
    config_dir: Option<&Path>,
    file: Option<PathBuf>,
) -> Result<TongueApi<FileStore>> {
    let config = match config_dir {
        Some(dir) => TongueConfig::load(dir)?,
        None => TongueConfig::default(),
    };

    let file = config.resolve_file(file);
    log::debug!("using collection file {}", file.display());
    Ok(TongueApi::new(FileStore::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::fs;
    use tempfile::TempDir;

    fn location(api: &TongueApi<FileStore>) -> String {
        api.store().location()
    }

    #[test]
    fn defaults_to_collection_json() {
        let temp = TempDir::new().unwrap();
        let api = initialize_in(Some(temp.path()), None).unwrap();
        assert_eq!(location(&api), "collection.json");

        let api = initialize_in(None, None).unwrap();
        assert_eq!(location(&api), "collection.json");
    }

    #[test]
    fn uses_configured_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"file": "italian.json"}"#).unwrap();

        let api = initialize_in(Some(temp.path()), None).unwrap();
        assert_eq!(
            location(&api),
            temp.path().join("italian.json").display().to_string()
        );
    }

    #[test]
    fn explicit_file_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"file": "configured.json"}"#).unwrap();

        let api = initialize_in(Some(temp.path()), Some(PathBuf::from("flag.json"))).unwrap();
        assert_eq!(location(&api), "flag.json");
    }

    #[test]
    fn corrupt_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "not json").unwrap();
        assert!(initialize_in(Some(temp.path()), None).is_err());
    }
}
