//! PDF rendering of the employment application form.
//!
//! `form::build_form` decides what goes where; this module only knows how to
//! put `DrawOp`s into a PDF with lopdf.

pub mod assets;
pub mod canvas;
pub mod fonts;
pub mod metrics;

use thiserror::Error;

use crate::applications::record::ApplicationRecord;
use crate::form::{build_form, Page};

pub use assets::FormAssets;
pub use canvas::PdfCanvas;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("font error: {0}")]
    Font(String),
}

/// Renders laid-out pages to PDF bytes.
pub fn render_pages(pages: &[Page], assets: &FormAssets) -> Result<Vec<u8>, RenderError> {
    let mut canvas = PdfCanvas::new(assets);
    for page in pages {
        canvas.add_page(page)?;
    }
    canvas.finish()
}

/// Lays out and renders the two-page form for `record`.
pub fn render_application(
    record: &ApplicationRecord,
    assets: &FormAssets,
) -> Result<Vec<u8>, RenderError> {
    render_pages(&build_form(record), assets)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_record_renders() {
        let bytes = render_application(&ApplicationRecord::new(), &FormAssets::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_full_record_renders_with_standard_fonts() {
        let record = ApplicationRecord::from_value(json!({
            "firstNameEn": "Anan",
            "firstNameTh": "อนันต์",
            "age": 29,
            "maritalStatus": "single",
            "englishSpoken": "good",
            "hasComputer": true,
            "family1Name": "Somsak",
            "work1Company": "Siam Cement Group Public Company Limited",
            "workedBefore": "no",
            "signatureDate": "01/02/2567"
        }));
        let bytes = render_application(&record, &FormAssets::default()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_document_uses_standard_fonts_without_assets() {
        let bytes = render_application(&ApplicationRecord::new(), &FormAssets::default()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let base_fonts: Vec<String> = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter_map(|dict| dict.get(b"BaseFont").ok())
            .filter_map(|name| name.as_name_str().ok().map(str::to_string))
            .collect();
        assert!(base_fonts.contains(&"Helvetica".to_string()));
        assert!(base_fonts.contains(&"Helvetica-Bold".to_string()));
        assert!(base_fonts.contains(&"ZapfDingbats".to_string()));
    }
}
