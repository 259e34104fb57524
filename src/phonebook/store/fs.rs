use super::{Storage, DEFAULT_STORAGE_KEY};
use crate::error::{PhonebookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed storage: one JSON file per key inside the data directory.
pub struct FileStorage {
    root: PathBuf,
    key: String,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.strip_suffix(".json").unwrap_or(key).to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PhonebookError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(self.data_file()) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PhonebookError::Io(e)),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;

        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.key, Uuid::new_v4()));
        fs::write(&tmp_file, bytes).map_err(PhonebookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.data_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhonebookError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.data_file().display().to_string()
    }
}
