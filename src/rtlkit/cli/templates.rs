//! # CLI Templates
//!
//! Report lines are minijinja templates kept in `templates/` and embedded at compile
//! time. Templates only lay out text and pick style names; anything that needs logic
//! (icons, which style a level maps to) is computed in `render.rs` and passed in.
//!
//! minijinja drops the final newline of a template, and `render.rs` trims what is left,
//! so each template decides its inner line breaks and the caller decides the last one.

pub const FOUND_TEMPLATE: &str = include_str!("templates/found.tmp");
pub const PROCESSING_TEMPLATE: &str = include_str!("templates/processing.tmp");
pub const OUTCOME_TEMPLATE: &str = include_str!("templates/outcome.tmp");
pub const DONE_TEMPLATE: &str = include_str!("templates/done.tmp");
