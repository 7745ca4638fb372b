use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Trait for a whole-collection storage backend.
///
/// A backend holds exactly one serialized collection. Stores call `load` once
/// at startup and `store` after every mutation with the complete collection;
/// there is no incremental append.
pub trait Backend: Send + Sync {
    /// Read the persisted bytes, or `None` when nothing has been written yet.
    fn load(&self) -> StoreResult<Option<Vec<u8>>>;
    /// Replace the persisted bytes.
    fn store(&self, bytes: &[u8]) -> StoreResult<()>;
    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Configuration for selecting and building a backend.
///
/// # Example
/// ```
/// use wordgame::BackendConfig;
///
/// // In-memory (for testing)
/// let config = BackendConfig::in_memory();
///
/// // JSON file on disk
/// let config = BackendConfig::file("data/words.json");
/// ```
#[derive(Clone, Debug, Default)]
pub enum BackendConfig {
    /// Persist to a single file, rewritten in full on every mutation.
    File { path: PathBuf },
    /// Keep bytes in memory only. Useful for testing.
    #[default]
    InMemory,
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        BackendConfig::InMemory
    }

    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        BackendConfig::File { path: path.into() }
    }

    pub fn build(&self) -> StoreResult<Box<dyn Backend>> {
        match self {
            BackendConfig::InMemory => Ok(Box::new(InMemoryBackend::new())),
            BackendConfig::File { path } => Ok(Box::new(FileBackend::open(path)?)),
        }
    }
}

/// File backend. Writes go to a sibling `.tmp` file which is then renamed
/// over the target, so a crash mid-write leaves the previous snapshot intact.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Prepare a backend at `path`, creating missing parent directories.
    /// The file itself is not created until the first `store`.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::backend(format!("create {}: {e}", parent.display()))
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Backend for FileBackend {
    fn load(&self) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::backend(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn store(&self, bytes: &[u8]) -> StoreResult<()> {
        let tmp = self.tmp_path();
        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::backend(format!("write {}: {e}", self.path.display()))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory backend using a `RwLock` around the last stored snapshot.
pub struct InMemoryBackend {
    snapshot: RwLock<Option<Vec<u8>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Start from pre-existing bytes, as if a file had already been written.
    pub fn with_snapshot(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: RwLock::new(Some(bytes)),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for InMemoryBackend {
    fn load(&self) -> StoreResult<Option<Vec<u8>>> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.clone())
    }

    fn store(&self, bytes: &[u8]) -> StoreResult<()> {
        *self
            .snapshot
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))? = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Decode the full collection held by `backend`. Nothing stored yet yields an
/// empty collection.
pub fn load_entries<T: DeserializeOwned>(backend: &dyn Backend) -> StoreResult<Vec<T>> {
    match backend.load()? {
        None => Ok(Vec::new()),
        Some(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Decode(format!("{}: {e}", backend.describe()))),
    }
}

/// Encode and write the full collection.
pub fn store_entries<T: Serialize>(backend: &dyn Backend, entries: &[T]) -> StoreResult<()> {
    let bytes = serde_json::to_vec(entries).map_err(|e| StoreError::Encode(e.to_string()))?;
    backend.store(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_roundtrip() {
        let backend = InMemoryBackend::new();
        assert!(load_entries::<String>(&backend).unwrap().is_empty());

        store_entries(&backend, &["a".to_string(), "b".to_string()]).unwrap();
        let loaded: Vec<String> = load_entries(&backend).unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn corrupt_snapshot_is_a_decode_error() {
        let backend = InMemoryBackend::with_snapshot(b"not json".to_vec());
        let err = load_entries::<String>(&backend).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn file_backend_missing_and_empty_file_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.json");
        let backend = FileBackend::open(&path).unwrap();
        assert!(backend.load().unwrap().is_none());

        fs::write(&path, b"").unwrap();
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn file_backend_replaces_whole_file_and_cleans_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let backend = FileBackend::open(&path).unwrap();

        backend.store(b"[1,2,3]").unwrap();
        backend.store(b"[4]").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"[4]");
        assert!(!backend.tmp_path().exists());
    }

    #[test]
    fn build_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let backend = BackendConfig::file(dir.path().join("x.json")).build().unwrap();
        assert!(backend.describe().ends_with("x.json"));
        assert_eq!(BackendConfig::in_memory().build().unwrap().describe(), "in-memory");
    }
}
