use super::{decode, TemplateStore};
use crate::error::{Result, RtlkitError};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory template storage for tests. Keys are kept sorted like `FileStore` output.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, Vec<u8>>,
    writes: usize,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Makes every write fail with a permission error.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn content(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

fn not_found(path: &Path) -> RtlkitError {
    RtlkitError::FileAccess {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such template"),
    }
}

impl TemplateStore for MemoryStore {
    fn list_templates(&self) -> Result<Vec<PathBuf>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        let bytes = self.files.get(path).ok_or_else(|| not_found(path))?;
        decode(path, bytes.clone())
    }

    fn write_template(&mut self, path: &Path, content: &str) -> Result<()> {
        if self.read_only {
            return Err(RtlkitError::FileAccess {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        let slot = self.files.get_mut(path).ok_or_else(|| not_found(path))?;
        *slot = content.as_bytes().to_vec();
        self.writes += 1;
        Ok(())
    }
}
