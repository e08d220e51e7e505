//! # Visual Reordering
//!
//! Terminals place glyphs strictly left to right, in the order they receive them. Hebrew
//! and Arabic text stored in logical (reading) order therefore shows up backwards unless it
//! is reordered first. This module turns logical text into visual text with the Unicode
//! Bidirectional Algorithm (UAX #9, via `unicode-bidi`).
//!
//! Each line is an independent paragraph: line breaks are kept exactly as they were and
//! never move. Within a line the paragraph direction comes from the first strong character
//! unless a [`BaseDirection`] forces it.
//!
//! Characters that end up at a right-to-left level are mirrored (rule L4), so `(שלום)`
//! still shows its brackets facing the right way after the line is reversed.

use crate::error::{Result, RtlkitError};
use serde::{Deserialize, Serialize};
use unicode_bidi::{BidiClass, BidiInfo, Level, ParagraphInfo, LTR_LEVEL, RTL_LEVEL};

/// Paragraph direction used when reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Detect from the first strong character (left-to-right if there is none).
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl BaseDirection {
    fn to_level(self) -> Option<Level> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::Ltr => Some(LTR_LEVEL),
            BaseDirection::Rtl => Some(RTL_LEVEL),
        }
    }
}

/// Reorders `text` from logical to visual order, detecting the direction of each line.
pub fn reorder(text: &str) -> String {
    reorder_with(text, BaseDirection::Auto)
}

/// Reorders `text` from logical to visual order with an explicit paragraph direction.
pub fn reorder_with(text: &str, base: BaseDirection) -> String {
    let mut out = String::with_capacity(text.len());

    for chunk in text.split_inclusive('\n') {
        let (line, ending) = if let Some(line) = chunk.strip_suffix("\r\n") {
            (line, "\r\n")
        } else if let Some(line) = chunk.strip_suffix('\n') {
            (line, "\n")
        } else {
            (chunk, "")
        };

        out.push_str(&reorder_line(line, base));
        out.push_str(ending);
    }

    out
}

/// Like [`reorder_with`], for raw bytes that still have to be checked for UTF-8.
pub fn reorder_bytes(bytes: &[u8], base: BaseDirection) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| RtlkitError::Encoding {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(reorder_with(text, base))
}

fn reorder_line(line: &str, base: BaseDirection) -> String {
    if line.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(line, base.to_level());
    if base != BaseDirection::Rtl && !info.levels.iter().any(|level| level.is_rtl()) {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    for para in &info.paragraphs {
        out.extend(visual_paragraph(&info, para));
    }
    out
}

fn visual_paragraph(info: &BidiInfo<'_>, para: &ParagraphInfo) -> Vec<char> {
    let range = para.range.clone();

    // One level per char of the whole text, with rule L1 applied to this range.
    let levels = info.reordered_levels_per_char(para, range.clone());

    let mut chars: Vec<(usize, char, Level)> = info
        .text
        .char_indices()
        .zip(levels)
        .filter(|((byte_idx, _), _)| range.contains(byte_idx))
        .map(|((byte_idx, c), level)| (byte_idx, c, level))
        .collect();

    // A paragraph separator (lone \r, U+2029, ...) closes the paragraph and stays last.
    let separator = match chars.last() {
        Some(&(byte_idx, c, _)) if info.original_classes[byte_idx] == BidiClass::B => {
            chars.pop();
            Some(c)
        }
        _ => None,
    };

    let levels: Vec<Level> = chars.iter().map(|&(_, _, level)| level).collect();
    let mut visual: Vec<char> = BidiInfo::reorder_visual(&levels)
        .into_iter()
        .map(|logical| {
            let (_, c, level) = chars[logical];
            if level.is_rtl() {
                mirror(c)
            } else {
                c
            }
        })
        .collect();

    visual.extend(separator);
    visual
}

/// Returns the mirrored form of a paired glyph, or `c` itself.
pub fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        '⁅' => '⁆',
        '⁆' => '⁅',
        '≤' => '≥',
        '≥' => '≤',
        '〈' => '〉',
        '〉' => '〈',
        '⟨' => '⟩',
        '⟩' => '⟨',
        '【' => '】',
        '】' => '【',
        '「' => '」',
        '」' => '「',
        '『' => '』',
        '』' => '『',
        '（' => '）',
        '）' => '（',
        '［' => '］',
        '］' => '［',
        '｛' => '｝',
        '｝' => '｛',
        _ => c,
    }
}
