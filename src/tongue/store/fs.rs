use super::DataStore;
use crate::error::{Result, TongueError};
use crate::model::Collection;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TongueError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Collection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TongueError::MissingFile(self.path.clone()));
            }
            Err(e) => return Err(TongueError::Io(e)),
        };

        let collection: Collection =
            serde_json::from_str(&content).map_err(TongueError::Serialization)?;
        log::debug!(
            "loaded {} entries from {}",
            collection.len(),
            self.path.display()
        );
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        // Serialize before touching the filesystem so a failure leaves the old file intact
        let content =
            serde_json::to_string_pretty(collection).map_err(TongueError::Serialization)?;

        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let tmp_file = self.tmp_path(&dir);
        fs::write(&tmp_file, content).map_err(TongueError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TongueError::Store(format!(
                "Couldn't replace {}: {}",
                self.path.display(),
                e
            )));
        }

        log::debug!(
            "saved {} entries to {}",
            collection.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
