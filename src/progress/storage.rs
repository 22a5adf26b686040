use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{RoadmapError, RoadmapResult};

/// Key-value persistence medium for serialized snapshots.
pub trait KeyValueStorage {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> RoadmapResult<Option<String>>;

    /// Replace the value under `key` in one step.
    fn write(&mut self, key: &str, value: &str) -> RoadmapResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn read(&self, key: &str) -> RoadmapResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> RoadmapResult<()> {
        (**self).write(key, value)
    }
}

/// Process-local storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `key = value`.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> RoadmapResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> RoadmapResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A medium that is switched off (private browsing, sandboxing, read-only disk).
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> RoadmapResult<Option<String>> {
        Err(RoadmapError::storage("storage is unavailable"))
    }

    fn write(&mut self, _key: &str, _value: &str) -> RoadmapResult<()> {
        Err(RoadmapError::storage("storage is unavailable"))
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/roadmap`.
    pub fn default_dir() -> RoadmapResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| RoadmapError::storage("could not determine the data directory"))?;
        Ok(base.join("roadmap"))
    }

    /// Directory holding the snapshot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> RoadmapResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> RoadmapResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RoadmapError::storage(format!(
                "read '{}': {e}",
                path.display()
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> RoadmapResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create data dir '{}'", self.dir.display()))?;
        // Readers only ever see a complete snapshot.
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value).with_context(|| format!("write '{}'", tmp.display()))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(anyhow::Error::new(e)
                .context(format!("replace '{}'", path.display()))
                .into());
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> RoadmapResult<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(RoadmapError::validation(format!(
            "storage key '{key}' must be non-empty ASCII alphanumerics, '_' or '-'"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/storage.rs"]
mod tests;
