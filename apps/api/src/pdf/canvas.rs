//! lopdf backend for form pages.
//!
//! `PdfCanvas` turns `DrawOp`s into page content streams. Font objects are
//! only written in `finish`, once every glyph the document uses is known, so
//! the width array and ToUnicode map cover exactly those glyphs.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::form::{Align, DrawOp, Page, TextOp, Weight, PAGE_HEIGHT, PAGE_WIDTH};
use crate::pdf::assets::{FormAssets, LogoImage};
use crate::pdf::fonts::{encode_glyphs, to_unicode_cmap, ShapedGlyph, TrueTypeFont};
use crate::pdf::metrics::{encode_win_ansi, get_metrics};
use crate::pdf::RenderError;

const LINE_WIDTH: f32 = 1.0;
const CHECKBOX_SIZE: f32 = 6.0;
const CHECK_SIZE: f32 = 7.5;
/// ZapfDingbats `4` is a check mark.
const CHECK_GLYPH: &[u8] = b"4";
const CHECK_ASCENT: f32 = 0.8;

const REGULAR_RESOURCE: &str = "F1";
const BOLD_RESOURCE: &str = "F2";
const CHECK_RESOURCE: &str = "F3";
const LOGO_RESOURCE: &str = "Im1";

/// An embedded face plus the glyphs drawn with it so far.
struct EmbeddedFace<'a> {
    font: &'a TrueTypeFont,
    object_id: ObjectId,
    used: BTreeMap<u16, char>,
}

impl<'a> EmbeddedFace<'a> {
    fn new(font: &'a TrueTypeFont, object_id: ObjectId) -> Self {
        Self {
            font,
            object_id,
            used: BTreeMap::new(),
        }
    }

    /// Shapes `text` into text-showing operations and its width in 1/1000 em.
    fn encode(&mut self, text: &str, size: f32) -> (Vec<Operation>, f32) {
        let glyphs = self.font.shape(text);
        for g in &glyphs {
            self.used.entry(g.glyph).or_insert(g.ch);
        }
        let width: f32 = glyphs.iter().map(|g| g.x_advance).sum();
        let font = self.font;
        (positioned_glyphs(&glyphs, size, |glyph| font.advance(glyph)), width)
    }
}

/// `TJ` runs placing each shaped glyph at its pen position plus offset.
///
/// `advance` is the width the font's `W` array gives a glyph; horizontal
/// corrections are TJ adjustments, vertical offsets switch the text rise.
/// The rise is reset to 0 before returning.
fn positioned_glyphs(
    glyphs: &[ShapedGlyph],
    size: f32,
    advance: impl Fn(u16) -> f32,
) -> Vec<Operation> {
    fn flush(ops: &mut Vec<Operation>, items: &mut Vec<Object>, pending: &mut Vec<u16>) {
        if !pending.is_empty() {
            items.push(Object::String(encode_glyphs(pending), StringFormat::Hexadecimal));
            pending.clear();
        }
        if !items.is_empty() {
            ops.push(Operation::new("TJ", vec![Object::Array(std::mem::take(items))]));
        }
    }

    let mut ops = Vec::new();
    let mut items: Vec<Object> = Vec::new();
    let mut pending: Vec<u16> = Vec::new();
    let mut rise = 0.0_f32;
    // Shaped pen position and the PDF's current text position, both in 1/1000 em.
    let mut pen = 0.0_f32;
    let mut cursor = 0.0_f32;

    for g in glyphs {
        if g.y_offset != rise {
            flush(&mut ops, &mut items, &mut pending);
            rise = g.y_offset;
            ops.push(Operation::new("Ts", vec![(rise * size / 1000.0).into()]));
        }
        let target = pen + g.x_offset;
        let shift = cursor - target;
        if shift.abs() > 0.01 {
            if !pending.is_empty() {
                items.push(Object::String(encode_glyphs(&pending), StringFormat::Hexadecimal));
                pending.clear();
            }
            items.push(shift.into());
        }
        pending.push(g.glyph);
        cursor = target + advance(g.glyph);
        pen += g.x_advance;
    }
    flush(&mut ops, &mut items, &mut pending);
    if rise != 0.0 {
        ops.push(Operation::new("Ts", vec![0.0_f32.into()]));
    }
    ops
}

/// How text is drawn for one document.
enum Faces<'a> {
    Embedded {
        regular: EmbeddedFace<'a>,
        /// Falls back to the regular face when no bold file is present.
        bold: Option<EmbeddedFace<'a>>,
    },
    Standard,
}

pub struct PdfCanvas<'a> {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    faces: Faces<'a>,
    logo: Option<(&'a LogoImage, ObjectId)>,
}

impl<'a> PdfCanvas<'a> {
    pub fn new(assets: &'a FormAssets) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let faces = match &assets.regular {
            Some(regular) => Faces::Embedded {
                regular: EmbeddedFace::new(regular, doc.new_object_id()),
                bold: assets
                    .bold
                    .as_ref()
                    .map(|bold| EmbeddedFace::new(bold, doc.new_object_id())),
            },
            None => Faces::Standard,
        };

        let logo = assets
            .logo
            .as_ref()
            .map(|logo| (logo, add_image(&mut doc, logo)));

        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            faces,
            logo,
        }
    }

    /// Appends one page built from `page.ops`.
    pub fn add_page(&mut self, page: &Page) -> Result<(), RenderError> {
        let mut operations = vec![Operation::new("w", vec![LINE_WIDTH.into()])];
        for op in &page.ops {
            self.draw(op, &mut operations);
        }

        let content = Content { operations }.encode()?;
        let content_id = self.doc.add_object(Stream::new(Dictionary::new(), content));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn draw(&mut self, op: &DrawOp, out: &mut Vec<Operation>) {
        match op {
            DrawOp::Text(text) => self.text(text, out),
            DrawOp::Rect { x, y, w, h } => {
                out.push(Operation::new(
                    "re",
                    vec![(*x).into(), flip(y + h).into(), (*w).into(), (*h).into()],
                ));
                out.push(Operation::new("S", vec![]));
            }
            DrawOp::Line { x1, y1, x2, y2 } => {
                out.push(Operation::new("m", vec![(*x1).into(), flip(*y1).into()]));
                out.push(Operation::new("l", vec![(*x2).into(), flip(*y2).into()]));
                out.push(Operation::new("S", vec![]));
            }
            DrawOp::Checkbox { x, y, checked } => {
                out.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        flip(y + CHECKBOX_SIZE).into(),
                        CHECKBOX_SIZE.into(),
                        CHECKBOX_SIZE.into(),
                    ],
                ));
                out.push(Operation::new("S", vec![]));
                if *checked {
                    let baseline = y - 1.0 + CHECK_ASCENT * CHECK_SIZE;
                    show_text(
                        out,
                        CHECK_RESOURCE,
                        CHECK_SIZE,
                        x + 1.0,
                        flip(baseline),
                        vec![show_string(Object::string_literal(CHECK_GLYPH))],
                    );
                }
            }
            DrawOp::Logo { x, y, width } => {
                if let Some((logo, _)) = self.logo {
                    let height = logo.scaled_height(*width);
                    out.push(Operation::new("q", vec![]));
                    out.push(Operation::new(
                        "cm",
                        vec![
                            (*width).into(),
                            0.into(),
                            0.into(),
                            height.into(),
                            (*x).into(),
                            flip(y + height).into(),
                        ],
                    ));
                    out.push(Operation::new("Do", vec![LOGO_RESOURCE.into()]));
                    out.push(Operation::new("Q", vec![]));
                }
            }
        }
    }

    fn text(&mut self, op: &TextOp, out: &mut Vec<Operation>) {
        let resource = match op.weight {
            Weight::Regular => REGULAR_RESOURCE,
            Weight::Bold => BOLD_RESOURCE,
        };

        let (shown, width, ascent) = match &mut self.faces {
            Faces::Embedded { regular, bold } => {
                let face = match (op.weight, bold.as_mut()) {
                    (Weight::Bold, Some(bold)) => bold,
                    _ => regular,
                };
                let (shown, width) = face.encode(&op.text, op.size);
                (shown, width, face.font.ascent)
            }
            Faces::Standard => {
                let metrics = get_metrics(op.weight);
                let bytes = encode_win_ansi(&op.text);
                let width = metrics.measure(&bytes);
                (
                    vec![show_string(Object::String(bytes, StringFormat::Literal))],
                    width,
                    f32::from(metrics.ascent),
                )
            }
        };

        let text_width = width * op.size / 1000.0;
        let x = match (op.align, op.width) {
            (Align::Center, Some(box_width)) => op.x + (box_width - text_width) / 2.0,
            _ => op.x,
        };
        let baseline = op.y + ascent * op.size / 1000.0;
        show_text(out, resource, op.size, x, flip(baseline), shown);
    }

    /// Writes font objects, the page tree and the catalog, and serialises.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let (regular_font, bold_font) = match std::mem::replace(&mut self.faces, Faces::Standard) {
            Faces::Embedded { regular, bold } => {
                let regular_id = write_type0_font(&mut self.doc, &regular);
                let bold_id = match bold {
                    Some(bold) => write_type0_font(&mut self.doc, &bold),
                    None => regular_id,
                };
                (regular_id, bold_id)
            }
            Faces::Standard => (
                add_standard_font(&mut self.doc, Weight::Regular),
                add_standard_font(&mut self.doc, Weight::Bold),
            ),
        };
        let check_font = self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "ZapfDingbats",
        });

        let mut resources = dictionary! {
            "Font" => dictionary! {
                REGULAR_RESOURCE => regular_font,
                BOLD_RESOURCE => bold_font,
                CHECK_RESOURCE => check_font,
            },
        };
        if let Some((_, logo_id)) = self.logo {
            resources.set("XObject", dictionary! { LOGO_RESOURCE => logo_id });
        }
        let resources_id = self.doc.add_object(resources);

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| id.into()).collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Title" => Object::string_literal("Employment Application"),
            "Producer" => Object::string_literal(concat!("employment-api ", env!("CARGO_PKG_VERSION"))),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);

        self.doc.compress();
        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Top-down page coordinate to PDF user space.
fn flip(y: f32) -> f32 {
    PAGE_HEIGHT - y
}

fn show_text(
    out: &mut Vec<Operation>,
    font: &str,
    size: f32,
    x: f32,
    y: f32,
    shown: Vec<Operation>,
) {
    out.push(Operation::new("BT", vec![]));
    out.push(Operation::new("Tf", vec![font.into(), size.into()]));
    out.push(Operation::new("Td", vec![x.into(), y.into()]));
    out.extend(shown);
    out.push(Operation::new("ET", vec![]));
}

fn show_string(string: Object) -> Operation {
    Operation::new("Tj", vec![string])
}

fn add_standard_font(doc: &mut Document, weight: Weight) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => get_metrics(weight).base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

/// RGB image XObject, with a DeviceGray soft mask when the logo has alpha.
fn add_image(doc: &mut Document, logo: &LogoImage) -> ObjectId {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => logo.width as i64,
        "Height" => logo.height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };
    if let Some(alpha) = &logo.alpha {
        let mask_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => logo.width as i64,
                "Height" => logo.height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            alpha.clone(),
        ));
        dict.set("SMask", mask_id);
    }
    doc.add_object(Stream::new(dict, logo.rgb.clone()))
}

/// Writes a Type0 / CIDFontType2 font into the object id reserved for it.
fn write_type0_font(doc: &mut Document, face: &EmbeddedFace) -> ObjectId {
    let font = face.font;
    let ascent = font.ascent.round() as i64;
    let descent = font.descent.round() as i64;

    let font_file = doc.add_object(Stream::new(
        dictionary! { "Length1" => font.data().len() as i64 },
        font.data().to_vec(),
    ));
    let descriptor = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => font.name.as_str(),
        "Flags" => 4,
        "FontBBox" => vec![0.into(), descent.into(), 1000.into(), ascent.into()],
        "ItalicAngle" => 0,
        "Ascent" => ascent,
        "Descent" => descent,
        "CapHeight" => ascent,
        "StemV" => 80,
        "FontFile2" => font_file,
    });

    let mut widths = Vec::with_capacity(face.used.len() * 2);
    for &glyph in face.used.keys() {
        widths.push(Object::Integer(i64::from(glyph)));
        widths.push(Object::Array(vec![Object::Integer(
            font.advance(glyph).round() as i64,
        )]));
    }
    let cid_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => font.name.as_str(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor,
        "DW" => 1000,
        "W" => widths,
        "CIDToGIDMap" => "Identity",
    });

    let used: Vec<(u16, char)> = face.used.iter().map(|(&g, &c)| (g, c)).collect();
    let to_unicode = doc.add_object(Stream::new(
        Dictionary::new(),
        to_unicode_cmap(&used).into_bytes(),
    ));

    doc.objects.insert(
        face.object_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => font.name.as_str(),
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![cid_font.into()],
            "ToUnicode" => to_unicode,
        }),
    );
    face.object_id
}
