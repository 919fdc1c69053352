//! Keyed-blob storage backends

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence seam for the store: named JSON blobs, loaded and saved
/// whole. The file backend is the real one; the memory backend keeps
/// tests off the filesystem.
pub trait StorageBackend: Send {
    fn load(&self, key: &str) -> std::io::Result<Option<String>>;
    fn save(&self, key: &str, blob: &str) -> std::io::Result<()>;
    fn remove(&self, key: &str) -> std::io::Result<()>;
}

/// One `<key>.json` file per blob under a base directory
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Write data atomically using temp file + rename
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path).map(Some)
    }

    fn save(&self, key: &str, blob: &str) -> std::io::Result<()> {
        atomic_write(&self.key_path(key), blob.as_bytes())
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests
#[derive(Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> std::io::Result<()> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> std::io::Result<()> {
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }
}
