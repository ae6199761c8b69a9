//! Directory-backed store: one `<key>.json` file per key.

use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{EventDeskError, EventDeskResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> EventDeskResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(EventDeskError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EventDeskResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> EventDeskResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Write then rename so a crash never leaves a half-written blob
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;

        tracing::debug!(key, bytes = value.len(), path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EventDeskResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get("events_data_v1").unwrap(), None);
        store.set("events_data_v1", "[]").unwrap();

        let reopened = FileStore::new(dir.path().join("data"));
        assert_eq!(reopened.get("events_data_v1").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data/events_data_v1.json").exists());
        assert!(!dir.path().join("data/events_data_v1.json.tmp").exists());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.remove("eventify_theme").unwrap();

        store.set("eventify_theme", "dark").unwrap();
        store.remove("eventify_theme").unwrap();
        assert_eq!(store.get("eventify_theme").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(EventDeskError::Storage(_))
        ));
        assert!(store.get("").is_err());
    }
}
