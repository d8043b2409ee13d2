//! Upload → plain text.
//!
//! The upload is spooled to a named temp file inside the upload directory and
//! read back from there. The file is removed when the `NamedTempFile` guard
//! drops, which happens on every return path of `extract_text`.

use std::io::Write;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A file received from the `resume` multipart field.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Upload {
    pub fn is_pdf(&self) -> bool {
        self.content_type.as_deref() == Some(PDF_CONTENT_TYPE)
    }
}

/// Extracts text from `upload`: PDFs via pdf-extract, anything else as UTF-8.
///
/// Runs on a blocking thread. The temp file never outlives this call.
pub async fn extract_text(upload: Upload, upload_dir: &Path) -> Result<String, AppError> {
    let upload_dir: PathBuf = upload_dir.to_path_buf();
    tokio::task::spawn_blocking(move || extract_text_sync(&upload, &upload_dir))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?
}

fn extract_text_sync(upload: &Upload, upload_dir: &Path) -> Result<String, AppError> {
    let mut file = NamedTempFile::new_in(upload_dir)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not create upload file: {e}")))?;
    file.write_all(&upload.bytes)
        .and_then(|_| file.flush())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not write upload file: {e}")))?;

    debug!(
        "Spooled upload {:?} ({} bytes, {:?}) to {}",
        upload.file_name,
        upload.bytes.len(),
        upload.content_type,
        file.path().display()
    );

    if upload.is_pdf() {
        pdf_extract::extract_text(file.path()).map_err(|e| AppError::Extraction(e.to_string()))
    } else {
        let bytes = std::fs::read(file.path())
            .map_err(|e| AppError::Extraction(format!("could not read upload: {e}")))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, bytes: &[u8]) -> Upload {
        Upload {
            file_name: Some("resume".to_string()),
            content_type: Some(content_type.to_string()),
            bytes: Bytes::copy_from_slice(bytes),
        }
    }

    fn is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_text_upload_is_read_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_text(upload("text/plain", "Anan Jaidee\nอนันต์".as_bytes()), dir.path())
            .await
            .unwrap();
        assert_eq!(text, "Anan Jaidee\nอนันต์");
        assert!(is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let text = extract_text(upload("text/plain", &[b'o', b'k', 0xFF]), dir.path())
            .await
            .unwrap();
        assert_eq!(text, "ok\u{FFFD}");
    }

    #[tokio::test]
    async fn test_broken_pdf_fails_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_text(upload(PDF_CONTENT_TYPE, b"%PDF-1.4 garbage"), dir.path()).await;
        assert!(result.is_err());
        assert!(is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_missing_upload_dir_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = extract_text(upload("text/plain", b"x"), &missing).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_only_pdf_content_type_is_pdf() {
        assert!(upload(PDF_CONTENT_TYPE, b"").is_pdf());
        assert!(!upload("application/octet-stream", b"").is_pdf());
        let untyped = Upload {
            file_name: None,
            content_type: None,
            bytes: Bytes::new(),
        };
        assert!(!untyped.is_pdf());
    }
}
