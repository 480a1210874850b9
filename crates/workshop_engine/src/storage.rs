//! String-keyed JSON value store, the on-disk stand-in for browser local storage.
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed store at {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not encode value for key {key:?}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("storage path {0:?} is not a directory")]
    NotADirectory(PathBuf),
}

pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn write(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Decodes the value under `key`, or falls back to `default()` when the key
/// is absent, unreadable or holds a value of the wrong shape.
pub fn load_or_default<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    let value = match store.read(key) {
        Ok(Some(value)) => value,
        Ok(None) => return default(),
        Err(err) => {
            engine_warn!("Failed to read {:?} from store: {}", key, err);
            return default();
        }
    };

    match serde_json::from_value(value) {
        Ok(decoded) => decoded,
        Err(err) => {
            engine_warn!("Stored value for {:?} has unexpected shape: {}", key, err);
            default()
        }
    }
}

pub fn save_value<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_value(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.write(key, encoded)
}

/// All keys live in one JSON object file. Every write replaces the whole
/// file through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    filename: String,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    pub const DEFAULT_FILENAME: &'static str = "local_storage.json";

    /// Opens `{dir}/local_storage.json`; a missing file is an empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let mut store = Self::empty(dir);
        let path = store.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(store),
            Err(err) => return Err(err.into()),
        };
        store.entries = serde_json::from_str(&content)
            .map_err(|source| StorageError::Malformed { path, source })?;
        engine_debug!("Loaded {} keys from {:?}", store.entries.len(), store.path());
        Ok(store)
    }

    /// A store that ignores anything already on disk and replaces it on the next write.
    pub fn empty(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            filename: Self::DEFAULT_FILENAME.to_string(),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn prepare_dir(&self) -> Result<(), StorageError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StorageError::NotADirectory(self.dir.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                engine_debug!("Creating storage directory {:?}", self.dir);
                fs::create_dir_all(&self.dir).map_err(StorageError::from)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Serializes `entries` straight into a temp file, then renames it over the store file.
    fn flush(&self, key: &str, entries: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        self.prepare_dir()?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut out, entries).map_err(|source| {
                StorageError::Encode {
                    key: key.to_string(),
                    source,
                }
            })?;
            out.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(self.path())
            .map_err(|err| StorageError::Io(err.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    /// The in-memory view only changes once the file on disk has been replaced.
    fn write(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.flush(key, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
