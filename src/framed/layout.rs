//! Width-aware line layout.
//!
//! All measurements are terminal columns as reported by `unicode-width`, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal placement of a line inside a wider cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cuts `s` so that it fits in `max_width` columns, ending with `…` when something was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    if max_width > 0 {
        result.push('…');
    }
    result
}

/// Cuts the start of `s` so that it fits in `max_width` columns, beginning with `…` when
/// something was cut. The end of the string is kept.
pub fn truncate_start_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut kept = Vec::new();
    let mut current_width = 0;

    for c in s.chars().rev() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        kept.push(c);
        current_width += char_width;
    }

    let mut result = String::new();
    if max_width > 0 {
        result.push('…');
    }
    result.extend(kept.into_iter().rev());
    result
}

/// Pads (or truncates) a single line to exactly `width` columns.
///
/// Overflow is cut on the side away from the anchor: right-aligned lines keep their
/// right edge, which is where visual-order right-to-left text starts.
pub fn align_line(line: &str, width: usize, align: Align) -> String {
    let line = match align {
        Align::Right => truncate_start_to_width(line, width),
        Align::Left | Align::Center => truncate_to_width(line, width),
    };
    let gap = width.saturating_sub(line.width());

    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };

    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

/// Aligns every line of `text` independently, keeping the line structure.
///
/// Right alignment does not keep trailing padding, so right-aligned output never ends
/// with spaces that a terminal would wrap.
pub fn align_text(text: &str, width: usize, align: Align) -> String {
    text.split('\n')
        .map(|line| {
            let aligned = align_line(line, width, align);
            match align {
                Align::Left | Align::Center => aligned.trim_end().to_string(),
                Align::Right => aligned,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
