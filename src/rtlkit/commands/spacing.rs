use super::CmdMessage;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::store::TemplateStore;
use log::info;
use std::path::{Path, PathBuf};

/// What happened to one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOutcome {
    pub path: PathBuf,
    /// Normalizing produced different content.
    pub changed: bool,
    /// The new content was written back (never true on a dry run).
    pub written: bool,
    pub applied: Vec<&'static str>,
    pub messages: Vec<CmdMessage>,
}

/// Lists the templates a run will process, in processing order.
pub fn discover<S: TemplateStore>(store: &S) -> Result<Vec<PathBuf>> {
    store.list_templates()
}

/// Normalizes one template and writes it back only if its content changed.
///
/// Errors are returned as is; the caller decides whether to continue with the next file.
pub fn normalize_template<S: TemplateStore>(
    store: &mut S,
    rules: &RuleSet,
    path: &Path,
    dry_run: bool,
) -> Result<TemplateOutcome> {
    let original = store.read_template(path)?;
    let normalized = rules.normalize(&original);

    let written = normalized.changed && !dry_run;
    if written {
        store.write_template(path, &normalized.content)?;
        info!("updated {}", path.display());
    }

    let message = match (normalized.changed, dry_run) {
        (true, false) => CmdMessage::success("Updated"),
        (true, true) => CmdMessage::info("Would update"),
        (false, _) => CmdMessage::warning("No changes made"),
    };

    Ok(TemplateOutcome {
        path: path.to_path_buf(),
        changed: normalized.changed,
        written,
        applied: normalized.applied,
        messages: vec![message],
    })
}
