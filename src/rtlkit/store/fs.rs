use super::{decode, TemplateStore};
use crate::error::{Result, RtlkitError};
use globset::{Glob, GlobMatcher};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    matcher: GlobMatcher,
}

impl FileStore {
    /// A store over the files directly inside `root` whose names match `pattern`.
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(Self {
            root: root.into(),
            matcher,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        self.matcher.glob().glob()
    }

    fn is_template(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        // `*` does not match hidden files, same as a shell glob
        !name.starts_with('.') && self.matcher.is_match(name)
    }
}

impl TemplateStore for FileStore {
    fn list_templates(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("template directory {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(RtlkitError::FileAccess {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RtlkitError::FileAccess {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && self.is_template(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        debug!(
            "found {} templates in {} matching {}",
            paths.len(),
            self.root.display(),
            self.pattern()
        );
        Ok(paths)
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| RtlkitError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} ({} bytes)", path.display(), bytes.len());
        decode(path, bytes)
    }

    fn write_template(&mut self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| RtlkitError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}
