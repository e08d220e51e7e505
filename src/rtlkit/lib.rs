//! # rtlkit Architecture
//!
//! rtlkit holds two small text tools used around Hebrew email templates:
//!
//! - **Visual reordering**: turning right-to-left text from logical order into the order
//!   a left-to-right console needs, so it reads correctly when printed (see [`bidi`]).
//! - **Spacing normalization**: rewriting the spacing values of HTML email bodies to a
//!   single 20px standard with a fixed table of substitutions (see [`rules`]).
//!
//! The two share nothing but the layering below.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, builds the output Surface, prints      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TextApi (direction) and RtlkitApi (store plus rules)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic (bidi.rs, rules.rs, commands/*.rs)                   │
//! │  - Pure transforms: reorder, normalize                      │
//! │  - Per-file flow: read, normalize, write only when changed  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TemplateStore trait                                      │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Transforms
//!
//! [`bidi::reorder`] and [`rules::RuleSet::normalize`] take a string and return a string.
//! They never touch the filesystem or the terminal, so they are tested directly. Reading
//! and writing templates goes through [`store::TemplateStore`]; printing goes through a
//! `framed::Surface` built once by the CLI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`bidi`]: Logical to visual reordering
//! - [`rules`]: The spacing rule table and its compiled form
//! - [`commands`]: Demo and per-template normalization flows
//! - [`store`]: Template storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod bidi;
pub mod commands;
pub mod config;
pub mod error;
pub mod rules;
pub mod store;
