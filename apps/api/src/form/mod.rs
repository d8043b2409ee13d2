//! The employment application form as data.
//!
//! `build_form` turns an application record into backend-neutral drawing
//! operations, one `Page` per sheet of the paper form. Positions use the
//! paper convention: origin at the top-left corner, y growing downward, in
//! PDF points. A text operation's `y` is the top of its line box.
//!
//! Nothing here wraps, paginates or measures: every coordinate is a literal
//! taken from the printed form.

pub mod descriptor;
pub mod layout;

pub use layout::build_form;

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 30.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Only used to centre text; a single line is never wrapped or clipped.
    pub width: Option<f32>,
    pub align: Align,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    /// Stroked rectangle outline.
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// 6×6pt tick box.
    Checkbox { x: f32, y: f32, checked: bool },
    /// Company logo, scaled to `width` with its aspect ratio kept.
    Logo { x: f32, y: f32, width: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// First text operation whose content starts with `prefix`.
    pub fn find_text(&self, prefix: &str) -> Option<&TextOp> {
        self.texts().find(|t| t.text.starts_with(prefix))
    }

    pub fn checkboxes(&self) -> impl Iterator<Item = (f32, f32, bool)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Checkbox { x, y, checked } => Some((*x, *y, *checked)),
            _ => None,
        })
    }
}
