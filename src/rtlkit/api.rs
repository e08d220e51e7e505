//! # API Layer
//!
//! Two facades cover every operation the CLI offers:
//!
//! - [`TextApi`] reorders text for the console. It holds only the paragraph direction
//!   and never touches templates, so a broken template setting cannot stop it.
//! - [`RtlkitApi`] bundles the template store with the compiled spacing rules and runs
//!   the normalization flow in [`crate::commands::spacing`].
//!
//! Nothing here prints or exits. Callers get Rust values back and decide how to show
//! them, which is how the CLI can print progress file by file.

use crate::bidi::{reorder_bytes, reorder_with, BaseDirection};
use crate::commands::demo::{self, DemoBlocks, DemoText};
use crate::commands::spacing::{self, TemplateOutcome};
use crate::error::Result;
use crate::rules::RuleSet;
use crate::store::TemplateStore;
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, MessageLevel};

/// Console text operations with a fixed paragraph direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextApi {
    direction: BaseDirection,
}

impl TextApi {
    pub fn new(direction: BaseDirection) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> BaseDirection {
        self.direction
    }

    pub fn reorder(&self, text: &str) -> String {
        reorder_with(text, self.direction)
    }

    pub fn reorder_bytes(&self, bytes: &[u8]) -> Result<String> {
        reorder_bytes(bytes, self.direction)
    }

    pub fn demo(&self, text: &DemoText) -> DemoBlocks {
        demo::run(text, self.direction)
    }
}

pub struct RtlkitApi<S: TemplateStore> {
    store: S,
    rules: RuleSet,
}

impl<S: TemplateStore> RtlkitApi<S> {
    /// An API over `store` with the body spacing rules.
    pub fn new(store: S) -> Result<Self> {
        Ok(Self::with_rules(store, RuleSet::body_spacing()?))
    }

    pub fn with_rules(store: S, rules: RuleSet) -> Self {
        Self { store, rules }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn discover_templates(&self) -> Result<Vec<PathBuf>> {
        spacing::discover(&self.store)
    }

    pub fn normalize_template(&mut self, path: &Path, dry_run: bool) -> Result<TemplateOutcome> {
        spacing::normalize_template(&mut self.store, &self.rules, path, dry_run)
    }
}
