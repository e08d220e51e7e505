//! Styles for the rtlkit CLI.
//!
//! Templates refer to semantic names only (`path`, `success`, ...); the actual colors
//! live here. Message levels map one to one onto style names, so a `CmdMessage` of level
//! `warning` is painted with the `warning` style.

use console::Style;
use framed::Theme;
use once_cell::sync::Lazy;

pub mod names {
    pub const COUNT: &str = "count";
    pub const PATH: &str = "path";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const PANEL_TITLE: &str = "panel_title";
}

pub static RTLKIT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::COUNT, Style::new().bold())
        .add(names::PATH, Style::new().cyan())
        .add(names::MUTED, Style::new().dim())
        .add(names::INFO, Style::new().blue())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::PANEL_TITLE, Style::new().bold())
});
