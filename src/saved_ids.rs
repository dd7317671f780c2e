use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const SAVED_IDS_FILE: &str = "saved_pokemon.json";

#[derive(Error, Debug)]
pub enum SavedIdsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage for the ids of cards the user has already saved
pub trait SavedIdStore: Send + Sync {
    /// Never fails: an unreadable store reads as empty
    fn get_saved_ids(&self) -> Vec<String>;
    fn save_ids(&self, ids: &[String]) -> Result<(), SavedIdsError>;
}

/// Keeps saved ids as a JSON array in the app data directory
pub struct FileSavedIdStore {
    path: PathBuf,
}

impl FileSavedIdStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SAVED_IDS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SavedIdStore for FileSavedIdStore {
    fn get_saved_ids(&self) -> Vec<String> {
        let contents = match std::fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved ids at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Ignoring malformed {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save_ids(&self, ids: &[String]) -> Result<(), SavedIdsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec(ids)?;
        std::fs::write(&self.path, json)?;

        debug!("Wrote {} saved ids to {}", ids.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileSavedIdStore::new(dir.path());
        assert!(store.get_saved_ids().is_empty());
    }

    #[test]
    fn writes_then_reads_ids() {
        let dir = TempDir::new().unwrap();
        let store = FileSavedIdStore::new(&dir.path().join("nested"));

        let ids = vec!["base1-58".to_string(), "xy1-1".to_string()];
        store.save_ids(&ids).unwrap();

        assert_eq!(store.get_saved_ids(), ids);
    }

    #[test]
    fn malformed_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileSavedIdStore::new(dir.path());
        std::fs::write(store.path(), b"{not json").unwrap();

        assert!(store.get_saved_ids().is_empty());
    }
}
