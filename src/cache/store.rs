//! Key-value persistence for cached content
//!
//! Provides the `CacheStore` abstraction the cache gate reads and writes
//! through, and `FileStore`, the on-disk implementation storing one JSON
//! document per key in an XDG-compliant cache directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

/// String key-value store the cache gate persists through.
///
/// Injected into the gate at construction so tests can substitute an
/// in-memory fake. Read failures are reported as absence; only writes
/// surface an error.
pub trait CacheStore {
    /// Reads the value stored under `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// On-disk store keeping one file per key
///
/// Files live in an XDG-compliant cache directory
/// (`~/.cache/dailyword/` on Linux, or the equivalent platform path).
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory where entries are stored
    dir: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore in the platform cache directory.
    ///
    /// Returns `None` if the directory cannot be determined (e.g., no home
    /// directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "dailyword")?;
        Some(Self {
            dir: project_dirs.cache_dir().to_path_buf(),
        })
    }

    /// Creates a new FileStore rooted at a custom directory
    ///
    /// Used by the `--cache-dir` flag and by tests.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the path of the file backing the given key
    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)
    }
}
