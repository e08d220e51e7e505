use crate::layout::{align_text, Align};
use crate::panel::Panel;
use console::Term;
use std::io::{self, Write};

/// Width used when the terminal size cannot be determined (pipes, CI).
pub const DEFAULT_WIDTH: usize = 80;

/// The output target for a run: a writer plus the width and color decision made for it.
///
/// Build one per run (usually with [`Surface::stdout`]) and pass it to the code that
/// prints. Tests build one over a `Vec<u8>` and inspect the bytes.
pub struct Surface<W: Write = Term> {
    out: W,
    width: usize,
    use_color: bool,
}

impl Surface<Term> {
    /// A surface over stdout, sized to the terminal, with color when stdout supports it.
    pub fn stdout() -> Self {
        let term = Term::stdout();
        let width = term
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH);
        let use_color = term.features().colors_supported() && console::colors_enabled();
        Self::new(term, width, use_color)
    }
}

impl<W: Write> Surface<W> {
    pub fn new(out: W, width: usize, use_color: bool) -> Self {
        Self {
            out,
            width,
            use_color,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Writes `text` followed by a newline.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes `text` as is; the caller owns the line breaks.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Writes every line of `text` aligned to the surface width.
    pub fn print_aligned(&mut self, text: &str, align: Align) -> io::Result<()> {
        let aligned = align_text(text, self.width, align);
        self.println(&aligned)
    }

    pub fn print_panel(&mut self, panel: &Panel) -> io::Result<()> {
        let rendered = panel.render(self.width, self.use_color);
        self.println(&rendered)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
