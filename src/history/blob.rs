use crate::error::{LoanError, Result};
use std::path::PathBuf;

/// Key-value storage for serialized blobs.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(LoanError::InvalidInput(format!("invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(LoanError::Io(error)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(LoanError::Io)?;
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&staging, value).map_err(LoanError::Io)?;
        std::fs::rename(&staging, &path).map_err(LoanError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(LoanError::Io(error)),
        }
    }
}

/// In-memory store for exercising history logic without touching disk.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_reads_none_for_missing_key() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = FileBlobStore::new(dir.path().join("state"));
        assert_eq!(store.read("history").expect("read should succeed"), None);
    }

    #[test]
    fn file_store_writes_reads_and_removes() {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut store = FileBlobStore::new(dir.path().join("state"));

        store.write("history", "[1,2,3]").expect("write should succeed");
        assert!(dir.path().join("state/history.json").exists());
        assert!(!dir.path().join("state/.history.json.tmp").exists());
        assert_eq!(
            store.read("history").expect("read should succeed").as_deref(),
            Some("[1,2,3]")
        );

        store.remove("history").expect("remove should succeed");
        assert_eq!(store.read("history").expect("read should succeed"), None);
        store.remove("history").expect("removing twice should succeed");
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = FileBlobStore::new(dir.path());
        assert!(matches!(
            store.read("../escape"),
            Err(LoanError::InvalidInput(_))
        ));
    }

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryBlobStore::new();
        store.write("k", "v").expect("write should succeed");
        assert_eq!(store.read("k").expect("read should succeed").as_deref(), Some("v"));
        store.remove("k").expect("remove should succeed");
        assert_eq!(store.read("k").expect("read should succeed"), None);
    }
}
