use crate::layout::{align_line, display_width, truncate_to_width, Align};
use crate::paint_with;
use console::Style;

/// The glyphs used to draw a panel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const ROUNDED: BoxChars = BoxChars {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// A bordered box around a block of text, with an optional title centered in the top edge.
///
/// Panels always fill the width they are rendered at. Body lines that do not fit are
/// truncated with `…` on the side away from the alignment; they are never wrapped.
#[derive(Debug, Clone)]
pub struct Panel {
    body: String,
    title: Option<String>,
    border_style: Style,
    title_style: Style,
    padding: (usize, usize),
    align: Align,
    chars: BoxChars,
}

impl Panel {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            border_style: Style::new(),
            title_style: Style::new(),
            padding: (0, 1),
            align: Align::Left,
            chars: ROUNDED,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Blank lines above/below the body and spaces left/right of it.
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.padding = (vertical, horizontal);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn box_chars(mut self, chars: BoxChars) -> Self {
        self.chars = chars;
        self
    }

    /// Renders the panel to `width` columns. The result has no trailing newline.
    pub fn render(&self, width: usize, use_color: bool) -> String {
        let inner = width.saturating_sub(2);
        let (pad_v, pad_h) = self.padding;
        let pad_h = pad_h.min(inner / 2);
        let content_width = inner.saturating_sub(pad_h * 2);

        let border = |s: &str| paint_with(&self.border_style, s, use_color);
        let vertical = border(&self.chars.vertical.to_string());

        let mut lines = Vec::new();
        lines.push(self.top_edge(inner, use_color));

        let blank = format!("{vertical}{}{vertical}", " ".repeat(inner));
        for _ in 0..pad_v {
            lines.push(blank.clone());
        }

        let side = " ".repeat(pad_h);
        for line in self.body.split('\n') {
            let cell = align_line(line, content_width, self.align);
            lines.push(format!("{vertical}{side}{cell}{side}{vertical}"));
        }

        for _ in 0..pad_v {
            lines.push(blank.clone());
        }

        let bottom: String = std::iter::once(self.chars.bottom_left)
            .chain(std::iter::repeat(self.chars.horizontal).take(inner))
            .chain(std::iter::once(self.chars.bottom_right))
            .collect();
        lines.push(border(&bottom));

        lines.join("\n")
    }

    fn top_edge(&self, inner: usize, use_color: bool) -> String {
        let horizontal = self.chars.horizontal.to_string();
        let border = |s: &str| paint_with(&self.border_style, s, use_color);

        let title = match self.title.as_deref() {
            Some(title) if !title.is_empty() && inner >= 4 => {
                Some(truncate_to_width(title, inner - 2))
            }
            _ => None,
        };

        let Some(title) = title else {
            let edge = format!(
                "{}{}{}",
                self.chars.top_left,
                horizontal.repeat(inner),
                self.chars.top_right
            );
            return border(&edge);
        };

        let label = format!(" {title} ");
        let fill = inner.saturating_sub(display_width(&label));
        let left = fill / 2;
        let right = fill - left;

        format!(
            "{}{}{}",
            border(&format!("{}{}", self.chars.top_left, horizontal.repeat(left))),
            paint_with(&self.title_style, &label, use_color),
            border(&format!("{}{}", horizontal.repeat(right), self.chars.top_right)),
        )
    }
}
