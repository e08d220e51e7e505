//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting. For the layering, see the library docs in `rtlkit`.
//!
//! ## Naked Execution (`rtlkit`)
//!
//! Running `rtlkit` with no command prints the help and exits 0.
//!
//! ## Reorder (`rtlkit reorder`)
//!
//! Words given on the command line are joined with single spaces and reordered as one
//! line. With no words, stdin is read to the end as raw bytes; malformed UTF-8 is an
//! error, not something to patch over. Line endings of piped input are kept.
//!
//! ## Spacing (`rtlkit spacing`, alias `update-body-spacing`)
//!
//! Output is written file by file as the run goes, so when a template fails the lines
//! for the files before it are already on screen and those files stay rewritten.
//!
//! ## Precedence
//!
//! Flags beat `config.json`, which beats built-in defaults.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
