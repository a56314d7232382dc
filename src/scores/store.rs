//! Key-value backends and the JSON score store built on them.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::{ScoreStore, Scores};
use crate::core::config::DEFAULT_SCORE_KEY;
use crate::error::Result;

/// Raw string storage addressed by key.
///
/// The browser's `localStorage` is the model: string keys, string values,
/// no transactions.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process key-value store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed key-value store: one `<key>.json` file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store files under `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// `ScoreStore` that keeps scores as JSON under a single key.
#[derive(Clone, Debug)]
pub struct JsonScoreStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> JsonScoreStore<K> {
    /// Store scores under the default `"scores"` key.
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_SCORE_KEY)
    }

    /// Store scores under a custom key.
    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying key-value store.
    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Read scores, surfacing storage and decode errors.
    ///
    /// Absent data is not an error and yields zero scores.
    pub fn try_load(&self) -> Result<Scores> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Scores::default()),
        }
    }

    /// Write scores, surfacing storage errors.
    pub fn try_save(&mut self, scores: &Scores) -> Result<()> {
        let raw = serde_json::to_string(scores)?;
        self.backend.set(&self.key, &raw)
    }
}

impl<K: KeyValueStore> ScoreStore for JsonScoreStore<K> {
    fn load(&self) -> Scores {
        match self.try_load() {
            Ok(scores) => {
                debug!(key = %self.key, x = scores.x, o = scores.o, "Loaded scores");
                scores
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable scores");
                Scores::default()
            }
        }
    }

    fn save(&mut self, scores: &Scores) {
        if let Err(e) = self.try_save(scores) {
            warn!(key = %self.key, error = %e, "Failed to persist scores");
        }
    }
}
