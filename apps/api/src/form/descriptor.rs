//! Field descriptors and the loop that draws them.
//!
//! Layout tables in `layout.rs` are written in terms of these types; the
//! `PageBuilder` is the only code that turns a descriptor plus a record into
//! drawing operations.

use crate::applications::record::{ApplicationRecord, LanguageRating};
use crate::form::{Align, DrawOp, Page, TextOp, Weight};

/// Marker appended to a truncated table cell.
pub const ELLIPSIS: &str = "..";

/// Where the value of a descriptor comes from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Fixed text.
    Literal(&'static str),
    Field(&'static str),
    /// Field value, or the fallback when the field is empty.
    FieldOr(&'static str, &'static str),
    /// Field value cut to at most `n` characters plus `..`.
    Truncated(&'static str, usize),
}

impl Source {
    pub fn resolve(&self, record: &ApplicationRecord) -> String {
        match *self {
            Source::Literal(text) => text.to_string(),
            Source::Field(field) => record.display(field),
            Source::FieldOr(field, fallback) => {
                let value = record.display(field);
                if value.is_empty() {
                    fallback.to_string()
                } else {
                    value
                }
            }
            Source::Truncated(field, max) => truncate(&record.display(field), max),
        }
    }
}

/// `label` followed by the resolved value, drawn at (`x`, `dy`) relative to
/// the section origin.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub x: f32,
    pub dy: f32,
    pub width: f32,
    pub label: &'static str,
    pub source: Source,
}

impl FieldSpec {
    pub const fn labelled(
        x: f32,
        dy: f32,
        width: f32,
        label: &'static str,
        field: &'static str,
    ) -> Self {
        Self {
            x,
            dy,
            width,
            label,
            source: Source::Field(field),
        }
    }

    pub const fn fixed(x: f32, dy: f32, width: f32, label: &'static str) -> Self {
        Self {
            x,
            dy,
            width,
            label,
            source: Source::Literal(""),
        }
    }

    pub fn resolve(&self, record: &ApplicationRecord) -> String {
        format!("{}{}", self.label, self.source.resolve(record))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Ticked when the field is exactly this string.
    Equals(&'static str, &'static str),
    /// Ticked when the field is truthy.
    Set(&'static str),
    /// Ticked when the language rating field reads as this rating.
    Rating(&'static str, LanguageRating),
}

impl Check {
    pub fn evaluate(&self, record: &ApplicationRecord) -> bool {
        match *self {
            Check::Equals(field, expected) => record.equals(field, expected),
            Check::Set(field) => record.is_set(field),
            Check::Rating(field, rating) => LanguageRating::of(record, field) == rating,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub x: f32,
    pub dy: f32,
    pub check: Check,
}

/// Column geometry of a ruled table. Cell text is inset from each column edge.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub widths: &'static [f32],
    pub height: f32,
    pub inset: f32,
}

impl TableSpec {
    /// Left edge of each column, relative to the table's left edge.
    pub fn column_offsets(&self) -> Vec<f32> {
        self.widths
            .iter()
            .scan(0.0_f32, |acc, w| {
                let start = *acc;
                *acc += w;
                Some(start)
            })
            .collect()
    }
}

/// One data row of a table. When `key` is set and empty the row is skipped.
#[derive(Debug, Clone, Copy)]
pub struct RowSpec {
    pub dy: f32,
    pub key: Option<&'static str>,
    pub cells: &'static [Source],
}

/// Cuts `text` to `max` characters, marking the cut with `..`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        text.to_string()
    }
}

/// Accumulates drawing operations for one page.
#[derive(Debug, Default)]
pub struct PageBuilder {
    ops: Vec<DrawOp>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_text(&mut self, op: TextOp) {
        if !op.text.is_empty() {
            self.ops.push(DrawOp::Text(op));
        }
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32) {
        self.push_text(TextOp {
            text: text.into(),
            x,
            y,
            size,
            width: None,
            align: Align::Left,
            weight: Weight::Regular,
        });
    }

    pub fn text_in(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, width: f32) {
        self.push_text(TextOp {
            text: text.into(),
            x,
            y,
            size,
            width: Some(width),
            align: Align::Left,
            weight: Weight::Regular,
        });
    }

    pub fn centered(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, width: f32) {
        self.push_text(TextOp {
            text: text.into(),
            x,
            y,
            size,
            width: Some(width),
            align: Align::Center,
            weight: Weight::Regular,
        });
    }

    /// Centred bold section heading.
    pub fn heading(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, width: f32) {
        self.push_text(TextOp {
            text: text.into(),
            x,
            y,
            size,
            width: Some(width),
            align: Align::Center,
            weight: Weight::Bold,
        });
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::Rect { x, y, w, h });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
    }

    pub fn checkbox(&mut self, x: f32, y: f32, checked: bool) {
        self.ops.push(DrawOp::Checkbox { x, y, checked });
    }

    pub fn logo(&mut self, x: f32, y: f32, width: f32) {
        self.ops.push(DrawOp::Logo { x, y, width });
    }

    /// Draws labelled fields relative to (`ox`, `oy`).
    pub fn fields(
        &mut self,
        record: &ApplicationRecord,
        ox: f32,
        oy: f32,
        size: f32,
        specs: &[FieldSpec],
    ) {
        for spec in specs {
            self.text_in(spec.resolve(record), ox + spec.x, oy + spec.dy, size, spec.width);
        }
    }

    /// Draws tick boxes relative to (`ox`, `oy`).
    pub fn checks(&mut self, record: &ApplicationRecord, ox: f32, oy: f32, specs: &[CheckSpec]) {
        for spec in specs {
            self.checkbox(ox + spec.x, oy + spec.dy, spec.check.evaluate(record));
        }
    }

    /// Outer box plus the vertical rule between each pair of columns.
    pub fn table_frame(&mut self, x: f32, y: f32, width: f32, table: &TableSpec) {
        self.rect(x, y, width, table.height);
        for offset in table.column_offsets().into_iter().skip(1) {
            self.line(x + offset, y, x + offset, y + table.height);
        }
    }

    /// One line of text per column at `dy`, inset from each column edge.
    pub fn table_line(&mut self, x: f32, y: f32, size: f32, table: &TableSpec, cells: &[&str]) {
        let columns = table.column_offsets().into_iter().zip(table.widths);
        for ((offset, width), cell) in columns.zip(cells) {
            self.text_in(*cell, x + offset + table.inset, y, size, width - 2.0 * table.inset);
        }
    }

    /// Fills data rows, skipping rows whose key field is empty.
    pub fn table_rows(
        &mut self,
        record: &ApplicationRecord,
        x: f32,
        y: f32,
        size: f32,
        table: &TableSpec,
        rows: &[RowSpec],
    ) {
        for row in rows {
            if let Some(key) = row.key {
                if record.display(key).is_empty() {
                    continue;
                }
            }
            let values: Vec<String> = row.cells.iter().map(|c| c.resolve(record)).collect();
            let cells: Vec<&str> = values.iter().map(String::as_str).collect();
            self.table_line(x, y + row.dy, size, table, &cells);
        }
    }

    pub fn finish(self) -> Page {
        Page { ops: self.ops }
    }
}
