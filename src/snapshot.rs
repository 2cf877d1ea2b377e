//! Persisted message snapshots.
//!
//! A session saves the messages it last ingested under [`SESSION_KEY`] so a
//! later run can re-analyze them without the original transcript. Saving
//! always replaces the whole snapshot for a key.
//!
//! - [`MemorySnapshotStore`] - In-process store, useful for tests and embedding
//! - [`FileSnapshotStore`] - One JSON file per key in a directory - requires `json-output` feature

use std::collections::HashMap;

use crate::Message;
use crate::error::Result;

/// Key under which a session stores its messages.
pub const SESSION_KEY: &str = "chat_data";

/// Storage backend for message snapshots.
pub trait SnapshotStore {
    /// Loads the snapshot stored under `key`, or `None` if there is none.
    fn load(&self, key: &str) -> Result<Option<Vec<Message>>>;

    /// Stores `messages` under `key`, replacing any previous snapshot.
    fn save(&mut self, key: &str, messages: &[Message]) -> Result<()>;

    /// Removes the snapshot stored under `key`. Missing snapshots are not an error.
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// Snapshot store kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: HashMap<String, Vec<Message>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a snapshot exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<Vec<Message>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, messages: &[Message]) -> Result<()> {
        self.entries.insert(key.to_owned(), messages.to_vec());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(feature = "json-output")]
pub use file_store::FileSnapshotStore;

#[cfg(feature = "json-output")]
mod file_store {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use tracing::debug;

    use super::SnapshotStore;
    use crate::Message;
    use crate::error::{ChatlensError, Result};

    /// Snapshot store writing `<dir>/<key>.json`.
    ///
    /// Writes go to a temporary file that is renamed over the target, so a
    /// reader never sees a half-written snapshot.
    #[derive(Debug, Clone)]
    pub struct FileSnapshotStore {
        dir: PathBuf,
    }

    impl FileSnapshotStore {
        /// Creates a store rooted at `dir`. The directory is created on first save.
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// Path of the snapshot file for `key`.
        pub fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl SnapshotStore for FileSnapshotStore {
        fn load(&self, key: &str) -> Result<Option<Vec<Message>>> {
            let path = self.path_for(key);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            let messages: Vec<Message> = serde_json::from_str(&content)
                .map_err(|e| ChatlensError::snapshot(key, e.to_string()))?;
            debug!(key, count = messages.len(), path = %path.display(), "snapshot loaded");
            Ok(Some(messages))
        }

        fn save(&mut self, key: &str, messages: &[Message]) -> Result<()> {
            fs::create_dir_all(&self.dir)?;

            let path = self.path_for(key);
            let tmp = self.dir.join(format!("{key}.json.tmp"));
            let json = serde_json::to_string(messages)?;
            fs::write(&tmp, json)?;
            fs::rename(&tmp, &path)?;

            debug!(key, count = messages.len(), path = %path.display(), "snapshot saved");
            Ok(())
        }

        fn clear(&mut self, key: &str) -> Result<()> {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}
