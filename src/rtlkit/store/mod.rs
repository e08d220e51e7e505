//! # Storage Layer
//!
//! Templates are read and written through the [`TemplateStore`] trait so the
//! normalization flow can run against a real directory or against memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: files directly inside one directory whose names match a glob
//!   (`templates/bodies/*.html` by default)
//! - [`memory::MemoryStore`]: an in-memory map of path to bytes, for tests
//!
//! ## Contract
//!
//! - `list_templates` returns paths in a stable (sorted) order
//! - `read_template` returns the whole file as UTF-8 text, or
//!   [`RtlkitError::Decoding`](crate::error::RtlkitError::Decoding) when it is not UTF-8
//! - `write_template` replaces the whole file in place; it never creates templates
//!   that were not listed, and nothing is ever deleted
//!
//! There is no locking or backup. A run interrupted halfway leaves some templates
//! rewritten and the rest untouched; running again finishes the job because
//! normalization is idempotent.

use crate::error::{Result, RtlkitError};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait TemplateStore {
    /// List the templates to process, sorted by path.
    fn list_templates(&self) -> Result<Vec<PathBuf>>;

    /// Read a template as UTF-8 text.
    fn read_template(&self, path: &Path) -> Result<String>;

    /// Overwrite a template with new content.
    fn write_template(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Decodes template bytes, reporting the offending path on failure.
pub(crate) fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| RtlkitError::Decoding {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
