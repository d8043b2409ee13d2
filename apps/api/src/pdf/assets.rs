use std::path::Path;

use image::GenericImageView;
use tracing::{info, warn};

use crate::pdf::fonts::TrueTypeFont;
use crate::pdf::RenderError;

pub const REGULAR_FONT_FILE: &str = "fonts/THSarabunNew.ttf";
pub const BOLD_FONT_FILE: &str = "fonts/THSarabunNew-Bold.ttf";
pub const LOGO_FILE: &str = "Logo.png";

/// Decoded logo: 8-bit RGB samples plus an optional alpha plane.
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    /// `None` when every pixel is opaque.
    pub alpha: Option<Vec<u8>>,
}

impl LogoImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let image = image::load_from_memory(bytes)?;
        let (width, height) = image.dimensions();
        let rgba = image.to_rgba8();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }
        let alpha = alpha.iter().any(|&a| a != u8::MAX).then_some(alpha);

        Ok(Self {
            width,
            height,
            rgb,
            alpha,
        })
    }

    /// Height in points when drawn `width` points wide.
    pub fn scaled_height(&self, width: f32) -> f32 {
        width * self.height as f32 / self.width as f32
    }
}

/// Fonts and logo for the application form, read once at startup.
///
/// Every asset is optional: a missing or unreadable file is logged and the
/// renderer falls back to standard fonts or skips the logo.
#[derive(Default)]
pub struct FormAssets {
    pub regular: Option<TrueTypeFont>,
    pub bold: Option<TrueTypeFont>,
    pub logo: Option<LogoImage>,
}

impl FormAssets {
    pub fn load(assets_dir: &Path) -> Self {
        let regular = load_font("THSarabunNew", &assets_dir.join(REGULAR_FONT_FILE));
        let bold = load_font("THSarabunNew-Bold", &assets_dir.join(BOLD_FONT_FILE));
        let logo = load_logo(&assets_dir.join(LOGO_FILE));

        info!(
            "Form assets from {}: regular font {}, bold font {}, logo {}",
            assets_dir.display(),
            loaded(regular.is_some()),
            loaded(bold.is_some()),
            loaded(logo.is_some()),
        );

        Self {
            regular,
            bold,
            logo,
        }
    }
}

fn loaded(present: bool) -> &'static str {
    if present {
        "loaded"
    } else {
        "missing"
    }
}

fn load_font(name: &str, path: &Path) -> Option<TrueTypeFont> {
    match TrueTypeFont::load(name, path) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Font {} unavailable: {e}", path.display());
            None
        }
    }
}

fn load_logo(path: &Path) -> Option<LogoImage> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Logo {} unavailable: {e}", path.display());
            return None;
        }
    };
    match LogoImage::decode(&bytes) {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!("Logo {} could not be decoded: {e}", path.display());
            None
        }
    }
}
