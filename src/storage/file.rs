use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::ContentStore;
use crate::content::Content;
use crate::error::StorageError;
use crate::util::time;

/// A persisted content snapshot with enough metadata to audit recovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub content: Content,
    /// Seconds since the UNIX epoch when the snapshot was written.
    pub timestamp: u64,
    /// Crate version that wrote the snapshot.
    pub version: String,
}

impl ContentSnapshot {
    pub fn new(content: &Content) -> Self {
        Self {
            content: content.clone(),
            timestamp: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Stores content as JSON snapshot files in a state directory.
///
/// Each persist writes `autosave_<timestamp>.json`; old snapshots are rotated
/// out once `max_autosaves` is exceeded, and `load` recovers from the newest
/// one. This is the durable collaborator hosts use when they have a local
/// filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    state_dir: PathBuf,
    max_autosaves: usize,
}

impl FileStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            max_autosaves: 5,
        }
    }

    pub fn with_max_autosaves(mut self, max_autosaves: usize) -> Self {
        self.max_autosaves = max_autosaves.max(1);
        self
    }

    /// Save a named snapshot outside the autosave rotation, for explicit
    /// "save as" flows.
    pub fn save_named(&self, content: &Content, name: &str) -> Result<(), StorageError> {
        let snapshot = ContentSnapshot::new(content);
        self.write_snapshot(&snapshot, &format!("{name}.json"))
    }

    /// Load a snapshot previously written by `save_named`.
    pub fn load_named(&self, name: &str) -> Result<ContentSnapshot, StorageError> {
        let path = self.state_dir.join(format!("{name}.json"));
        read_snapshot(&path)
    }

    fn write_snapshot(&self, snapshot: &ContentSnapshot, file_name: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.state_dir)?;
        let path = self.state_dir.join(file_name);
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)?;
        log::debug!("wrote snapshot {}", path.display());
        Ok(())
    }

    fn autosave_files(&self) -> Result<Vec<fs::DirEntry>, StorageError> {
        let mut files: Vec<_> = fs::read_dir(&self.state_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("autosave_")
            })
            .collect();

        // Timestamps are zero-padded, so lexical order is chronological.
        files.sort_by_key(|entry| entry.file_name());
        Ok(files)
    }

    fn cleanup_old_autosaves(&self) -> Result<(), StorageError> {
        let mut files = self.autosave_files()?;
        while files.len() > self.max_autosaves {
            let oldest = files.remove(0);
            log::debug!("rotating out {}", oldest.path().display());
            fs::remove_file(oldest.path())?;
        }
        Ok(())
    }

    fn latest_autosave(&self) -> Result<Option<PathBuf>, StorageError> {
        Ok(self.autosave_files()?.pop().map(|entry| entry.path()))
    }
}

impl ContentStore for FileStore {
    fn persist(&mut self, content: &Content) -> Result<(), StorageError> {
        let snapshot = ContentSnapshot::new(content);
        // Zero-padded so rotation can rely on lexical file-name order.
        let file_name = format!("autosave_{:020}.json", snapshot.timestamp);
        self.write_snapshot(&snapshot, &file_name)?;
        self.cleanup_old_autosaves()?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Content>, StorageError> {
        if !self.state_dir.exists() {
            return Ok(None);
        }
        match self.latest_autosave()? {
            Some(path) => Ok(Some(read_snapshot(&path)?.content)),
            None => Ok(None),
        }
    }
}

fn read_snapshot(path: &Path) -> Result<ContentSnapshot, StorageError> {
    let json = fs::read_to_string(path)
        .map_err(|e| StorageError::Read(format!("{}: {e}", path.display())))?;
    let snapshot: ContentSnapshot = serde_json::from_str(&json)?;
    if snapshot.version != env!("CARGO_PKG_VERSION") {
        log::warn!(
            "snapshot {} was written by version {}, current is {}",
            path.display(),
            snapshot.version,
            env!("CARGO_PKG_VERSION")
        );
    }
    Ok(snapshot)
}
