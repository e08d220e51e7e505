//! # Framed - Styled Console Output
//!
//! A small rendering layer for command-line tools that print human-facing text:
//! named styles, aligned lines, bordered panels, and templates with a `style` filter.
//!
//! ## The Problem
//!
//! Tools that print right-to-left text, progress reports and boxed summaries end up
//! sprinkling ANSI codes and width arithmetic through their business logic. That code is
//! hard to test, and it breaks as soon as output is piped or the terminal is narrow.
//!
//! ## The Solution
//!
//! Framed keeps those concerns in one place:
//! - **Themes** map semantic names (`"updated"`, `"path"`) to `console::Style`s
//! - **Templates** (minijinja) lay out reports and apply styles via `{{ x | style("name") }}`
//! - **Layout** helpers measure text with `unicode-width`, so wide and combining
//!   characters line up
//! - A [`Surface`] is the single place that writes to the terminal. It is built once
//!   with a width and a color switch and handed to whoever needs to print.
//!
//! ## Quick Example
//!
//! ```rust
//! use framed::{render_with_color, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data {
//!     count: usize,
//! }
//!
//! let theme = Theme::new().add("count", Style::new().green());
//! let output = render_with_color(
//!     r#"Found {{ count | style("count") }} files"#,
//!     &Data { count: 3 },
//!     &theme,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(output, "Found 3 files");
//! ```
//!
//! ## Panels
//!
//! ```rust
//! use framed::{Align, Panel, Surface};
//!
//! let mut surface = Surface::new(Vec::new(), 20, false);
//! let panel = Panel::new("hello").title("greeting").align(Align::Right);
//! surface.print_panel(&panel).unwrap();
//!
//! let out = String::from_utf8(surface.into_inner()).unwrap();
//! assert!(out.starts_with("╭──── greeting ────╮"));
//! ```

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

mod layout;
mod panel;
mod surface;

pub use layout::{
    align_line, align_text, display_width, truncate_start_to_width, truncate_to_width, Align,
};
pub use panel::{BoxChars, Panel, ROUNDED};
pub use surface::{Surface, DEFAULT_WIDTH};

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
///
/// Styles are looked up by name from templates (via the `style` filter) and from code
/// (via [`Theme::paint`]). An unknown name prepends an indicator to the text so that
/// typos in templates are visible instead of silently unstyled.
///
/// # Example
///
/// ```rust
/// use framed::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("error", Style::new().bold().red())
///     .add("dim", Style::new().dim());
///
/// assert!(theme.has("error"));
/// assert_eq!(theme.paint("typo", "Hello", false), "(!?) Hello");
/// ```
#[derive(Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Theme {
    /// Creates an empty theme with the default missing style indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended for unknown style names. Empty disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds (or replaces) a named style, returning the theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies a named style to `text`.
    ///
    /// With `use_color` the ANSI codes are always emitted, whatever the terminal reports;
    /// callers decide color once (see [`Surface`]). Without it the text is returned plain.
    pub fn paint(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) => paint_with(style, text, use_color),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }
}

/// Applies `style` to `text`, or returns it unchanged when color is off.
pub fn paint_with(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders a one-off template with the given data and theme.
///
/// # Example
///
/// ```rust
/// use framed::{render_with_color, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { status: String }
///
/// let theme = Theme::new().add("ok", Style::new().green());
/// let plain = render_with_color(
///     r#"{{ status | style("ok") }}"#,
///     &Data { status: "done".into() },
///     &theme,
///     false,
/// ).unwrap();
/// assert_eq!(plain, "done");
/// ```
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

/// A renderer with pre-registered templates.
///
/// Templates are compiled once when added and rendered by name afterwards, which suits
/// reports that print the same line shape for every processed item.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_style_filter(&mut env, theme, use_color);
        Self { env }
    }

    /// Registers a named template. Syntax errors are reported here, not at render time.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not registered or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.paint(&name, &value.to_string(), use_color)
    });
}
