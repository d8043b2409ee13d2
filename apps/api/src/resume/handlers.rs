use axum::extract::multipart::{Field, Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use bytes::{Bytes, BytesMut};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::resume::extract::Upload;
use crate::resume::parse_resume;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";
/// Largest accepted resume file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Request body limit for the parse route: the file plus multipart framing.
pub const MAX_REQUEST_BYTES: usize = MAX_UPLOAD_BYTES + 64 * 1024;

const NO_FILE: &str = "No file uploaded";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    pub data: Map<String, Value>,
}

/// POST /api/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let multipart = multipart.map_err(|_| AppError::BadRequest(NO_FILE.to_string()))?;
    let upload = read_resume_field(multipart)
        .await?
        .ok_or_else(|| AppError::BadRequest(NO_FILE.to_string()))?;

    let data = parse_resume(state.completion.as_ref(), upload, &state.config.upload_dir).await?;
    Ok(Json(ParseResumeResponse {
        success: true,
        data,
    }))
}

/// First `resume` field of the form, other fields are skipped.
async fn read_resume_field(mut multipart: Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = read_capped(field, MAX_UPLOAD_BYTES).await?;
        return Ok(Some(Upload {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

/// Reads a field chunk by chunk, failing as soon as it exceeds `limit` bytes.
async fn read_capped(mut field: Field<'_>, limit: usize) -> Result<Bytes, AppError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")))?
    {
        if buffer.len() + chunk.len() > limit {
            return Err(AppError::BadRequest(format!(
                "File too large (max {} MB)",
                limit / (1024 * 1024)
            )));
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer.freeze())
}
