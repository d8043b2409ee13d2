//! Embedded TrueType faces.
//!
//! Metrics come from rusttype and are normalised to thousandths of an em,
//! the unit PDF font dictionaries use. Glyph ids are written straight into
//! Identity-H strings, so the CID of every glyph is its glyph id. Strings are
//! shaped with rustybuzz so Thai marks get the font's substitutions and
//! mark positioning.

use std::path::Path;

use rusttype::{Font, GlyphId, Scale};
use rustybuzz::{BufferClusterLevel, UnicodeBuffer};

use crate::pdf::RenderError;

/// One glyph of a shaped string. Metrics are in thousandths of an em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    pub glyph: u16,
    /// Source character, for the ToUnicode map.
    pub ch: char,
    pub x_advance: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

pub struct TrueTypeFont {
    /// PostScript-style name written as `BaseFont`.
    pub name: String,
    data: Vec<u8>,
    font: Font<'static>,
    /// Scale at which rusttype reports advances in font units.
    unit_scale: Scale,
    units_per_em: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TrueTypeFont {
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, RenderError> {
        let name = name.into();
        let font = Font::try_from_vec(data.clone())
            .ok_or_else(|| RenderError::Font(format!("{name}: not a TrueType font")))?;

        let units_per_em = f32::from(font.units_per_em());
        if units_per_em == 0.0 {
            return Err(RenderError::Font(format!("{name}: units per em is zero")));
        }
        let v = font.v_metrics_unscaled();

        Ok(Self {
            name,
            data,
            unit_scale: Scale::uniform(v.ascent - v.descent),
            ascent: v.ascent * 1000.0 / units_per_em,
            descent: v.descent * 1000.0 / units_per_em,
            units_per_em,
            font,
        })
    }

    pub fn load(name: &str, path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(name, data)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Glyph id for `c`; 0 (`.notdef`) when the font has no such glyph.
    pub fn glyph_id(&self, c: char) -> u16 {
        self.font.glyph(c).id().0
    }

    /// Advance width of a glyph in thousandths of an em.
    pub fn advance(&self, glyph: u16) -> f32 {
        let advance = self
            .font
            .glyph(GlyphId(glyph))
            .scaled(self.unit_scale)
            .h_metrics()
            .advance_width;
        advance * 1000.0 / self.units_per_em
    }

    /// Shapes `text` with the font's GSUB and GPOS tables. Falls back to a
    /// plain character-map lookup when rustybuzz cannot read the face.
    pub fn shape(&self, text: &str) -> Vec<ShapedGlyph> {
        let Some(face) = rustybuzz::Face::from_slice(&self.data, 0) else {
            return self.map_chars(text);
        };
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        // One cluster per character, so every mark keeps its own code point.
        buffer.set_cluster_level(BufferClusterLevel::Characters);
        buffer.guess_segment_properties();
        let output = rustybuzz::shape(&face, &[], buffer);

        let scale = 1000.0 / self.units_per_em;
        output
            .glyph_infos()
            .iter()
            .zip(output.glyph_positions())
            .map(|(info, pos)| ShapedGlyph {
                glyph: u16::try_from(info.glyph_id).unwrap_or(0),
                ch: cluster_char(text, info.cluster),
                x_advance: pos.x_advance as f32 * scale,
                x_offset: pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
            })
            .collect()
    }

    fn map_chars(&self, text: &str) -> Vec<ShapedGlyph> {
        text.chars()
            .map(|ch| {
                let glyph = self.glyph_id(ch);
                ShapedGlyph {
                    glyph,
                    ch,
                    x_advance: self.advance(glyph),
                    x_offset: 0.0,
                    y_offset: 0.0,
                }
            })
            .collect()
    }
}

/// Character starting at byte offset `cluster` of `text`.
fn cluster_char(text: &str, cluster: u32) -> char {
    text.get(cluster as usize..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Two-byte big-endian glyph ids, the string form for an Identity-H font.
pub fn encode_glyphs(glyphs: &[u16]) -> Vec<u8> {
    glyphs.iter().flat_map(|g| g.to_be_bytes()).collect()
}

/// `ToUnicode` CMap mapping each used glyph id back to its character.
pub fn to_unicode_cmap(glyphs: &[(u16, char)]) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    // bfchar blocks hold at most 100 entries.
    for chunk in glyphs.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (glyph, c) in chunk {
            let mut units = [0u16; 2];
            let hex: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{u:04X}"))
                .collect();
            cmap.push_str(&format!("<{glyph:04X}> <{hex}>\n"));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap
}
