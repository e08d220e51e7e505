//! # Rendering Module
//!
//! Turns API results into terminal text. Report lines go through the templates in
//! `templates.rs` with the theme from `styles.rs`; the demo goes straight to the
//! [`Surface`] as aligned text and a panel.
//!
//! Everything here writes to the `Surface` it is given. Nothing reaches for stdout on
//! its own, so tests render into a `Vec<u8>`.

use super::styles::{names, RTLKIT_THEME};
use super::templates::{DONE_TEMPLATE, FOUND_TEMPLATE, OUTCOME_TEMPLATE, PROCESSING_TEMPLATE};
use console::Style;
use framed::{Align, Panel, Renderer, Surface};
use rtlkit::api::{CmdMessage, MessageLevel};
use rtlkit::commands::demo::DemoBlocks;
use rtlkit::commands::spacing::TemplateOutcome;
use rtlkit::error::{Result, RtlkitError};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

const FOUND: &str = "found";
const PROCESSING: &str = "processing";
const OUTCOME: &str = "outcome";
const DONE: &str = "done";

#[derive(Serialize)]
struct FoundData {
    count: usize,
}

#[derive(Serialize)]
struct ProcessingData {
    path: String,
}

#[derive(Serialize)]
struct MessageLine {
    icon: &'static str,
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct OutcomeData {
    lines: Vec<MessageLine>,
    rules: Vec<&'static str>,
}

fn level_icon(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => "✅",
        // the emoji is narrow in most terminals, the extra space keeps text aligned
        MessageLevel::Warning => "⚠️ ",
        MessageLevel::Info => "🔍",
    }
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Info => names::INFO,
    }
}

fn render_err(err: impl std::fmt::Display) -> RtlkitError {
    RtlkitError::Render(err.to_string())
}

/// Prints the progress report of a spacing run, one call per event.
pub struct SpacingReport {
    renderer: Renderer,
    verbose: bool,
}

impl SpacingReport {
    pub fn new(use_color: bool, verbose: bool) -> Result<Self> {
        let mut renderer = Renderer::new(RTLKIT_THEME.clone(), use_color);
        for (name, source) in [
            (FOUND, FOUND_TEMPLATE),
            (PROCESSING, PROCESSING_TEMPLATE),
            (OUTCOME, OUTCOME_TEMPLATE),
            (DONE, DONE_TEMPLATE),
        ] {
            renderer.add_template(name, source).map_err(render_err)?;
        }
        Ok(Self { renderer, verbose })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let out = self.renderer.render(name, data).map_err(render_err)?;
        Ok(out.trim_end_matches('\n').to_string())
    }

    pub fn found<W: Write>(&self, surface: &mut Surface<W>, count: usize) -> Result<()> {
        let line = self.render(FOUND, &FoundData { count })?;
        surface.println(&line)?;
        Ok(())
    }

    pub fn processing<W: Write>(&self, surface: &mut Surface<W>, path: &Path) -> Result<()> {
        let line = self.render(
            PROCESSING,
            &ProcessingData {
                path: path.display().to_string(),
            },
        )?;
        surface.println("")?;
        surface.println(&line)?;
        Ok(())
    }

    pub fn outcome<W: Write>(
        &self,
        surface: &mut Surface<W>,
        outcome: &TemplateOutcome,
    ) -> Result<()> {
        let data = OutcomeData {
            lines: outcome
                .messages
                .iter()
                .map(|m| MessageLine {
                    icon: level_icon(m.level),
                    content: m.content.clone(),
                    style: level_style(m.level),
                })
                .collect(),
            rules: if self.verbose {
                outcome.applied.clone()
            } else {
                Vec::new()
            },
        };
        let text = self.render(OUTCOME, &data)?;
        surface.println(&text)?;
        Ok(())
    }

    pub fn done<W: Write>(&self, surface: &mut Surface<W>) -> Result<()> {
        let line = self.render(DONE, &())?;
        surface.println("")?;
        surface.println(&line)?;
        Ok(())
    }
}

/// Prints the demo: the message right-aligned, a blank line, then the panel.
pub fn print_demo<W: Write>(
    surface: &mut Surface<W>,
    blocks: &DemoBlocks,
    border: &str,
) -> Result<()> {
    surface.print_aligned(&blocks.message, Align::Right)?;
    surface.println("")?;

    let title_style = RTLKIT_THEME
        .get(names::PANEL_TITLE)
        .cloned()
        .unwrap_or_default();
    let panel = Panel::new(blocks.body.clone())
        .title(blocks.title.clone())
        .title_style(title_style)
        .border_style(Style::from_dotted_str(border))
        .padding(1, 2)
        .align(Align::Right);
    surface.print_panel(&panel)?;
    Ok(())
}

/// Prints messages painted with the theme style of their level.
pub fn print_messages<W: Write>(surface: &mut Surface<W>, messages: &[CmdMessage]) -> Result<()> {
    let use_color = surface.use_color();
    for message in messages {
        let line = RTLKIT_THEME.paint(level_style(message.level), &message.content, use_color);
        surface.println(&line)?;
    }
    Ok(())
}
