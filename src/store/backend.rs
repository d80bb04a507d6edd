//! Storage seam for the state containers.

use std::fs;
use std::path::PathBuf;

use rustc_hash::FxHashMap;

/// Key-value persistence for container state.
///
/// Containers write small JSON or code strings under fixed keys. A failing
/// backend degrades the container to in-memory behavior; it never takes
/// the process down.
pub trait StateBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// Ephemeral backend for tests and one-shot tools.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: FxHashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// One file per key under a directory.
///
/// Write failures are logged and swallowed; a read of a missing or
/// unreadable file is simply `None`.
#[derive(Debug, Clone)]
pub struct DirBackend {
    dir: PathBuf,
}

impl DirBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateBackend for DirBackend {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), "failed to create state dir: {e}");
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            tracing::warn!(key, "failed to persist state: {e}");
        }
    }

    fn delete(&mut self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, "failed to remove state: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("theme"), None);

        backend.write("theme", "dark");
        assert_eq!(backend.read("theme").as_deref(), Some("dark"));

        backend.delete("theme");
        assert_eq!(backend.read("theme"), None);
    }

    #[test]
    fn test_dir_backend_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "forest_monitor_backend_test_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);

        let mut backend = DirBackend::new(&dir);
        assert_eq!(backend.read("language"), None);

        backend.write("language", "nl");
        assert_eq!(backend.read("language").as_deref(), Some("nl"));

        // Deleting twice is fine.
        backend.delete("language");
        backend.delete("language");
        assert_eq!(backend.read("language"), None);

        let _ = fs::remove_dir_all(&dir);
    }
}
