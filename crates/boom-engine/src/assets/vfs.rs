//! Virtual filesystem: named assets resolved to byte streams.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::AssetError;

/// A place assets can be opened from by relative path.
pub trait AssetSource {
    /// Read the whole asset at `path`.
    fn open(&self, path: &str) -> Result<Vec<u8>, AssetError>;

    /// Read the asset at `path` as UTF-8 text.
    fn open_text(&self, path: &str) -> Result<String, AssetError> {
        let bytes = self.open(path)?;
        String::from_utf8(bytes).map_err(|_| AssetError::Encoding(path.to_string()))
    }
}

/// Assets stored under a directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn open(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        std::fs::read(self.root.join(path)).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssetError::NotFound(path.to_string()),
            _ => AssetError::Io {
                path: path.to_string(),
                source,
            },
        })
    }
}

/// Assets held in memory. Used for embedded game data and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an asset under `path`, replacing any previous content.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), data.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemorySource {
    fn open(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}
