use crate::bidi::{reorder_with, BaseDirection};

pub const DEMO_MESSAGE: &str = "שלום עולם! האם זה עובד עכשיו?";
pub const DEMO_TITLE: &str = "בדיקת מערכת";
pub const DEMO_BODY: &str = "הסוכן Gemini מחובר.\nכל המערכות תקינות.";

/// Demo input in logical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoText {
    pub message: String,
    pub title: String,
    pub body: String,
}

impl Default for DemoText {
    fn default() -> Self {
        Self {
            message: DEMO_MESSAGE.to_string(),
            title: DEMO_TITLE.to_string(),
            body: DEMO_BODY.to_string(),
        }
    }
}

/// Demo output in visual order, ready to be printed left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoBlocks {
    pub message: String,
    pub title: String,
    pub body: String,
}

/// Reorders every piece of the demo. Text is fixed before it goes into a panel, since
/// the panel only lays out glyphs and knows nothing about direction.
pub fn run(text: &DemoText, base: BaseDirection) -> DemoBlocks {
    DemoBlocks {
        message: reorder_with(&text.message, base),
        title: reorder_with(&text.title, base),
        body: reorder_with(&text.body, base),
    }
}
