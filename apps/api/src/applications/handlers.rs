use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::applications::record::ApplicationRecord;
use crate::applications::submission::{fetch_application, list_applications, submit_application};
use crate::errors::AppError;
use crate::pdf::render_application;
use crate::state::AppState;

pub const PDF_FILE_NAME: &str = "employment-application.pdf";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Objects and arrays are accepted; an array carries no named fields and
/// reads as an empty record. Bare strings, numbers, booleans and null are rejected.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<ApplicationRecord, AppError> {
    let Json(value) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(ApplicationRecord::from_value(value)),
        other => Err(AppError::BadRequest(format!(
            "Expected a JSON object, got {other}"
        ))),
    }
}

/// POST /api/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let record = json_body(body)?;
    let id = submit_application(state.store.as_ref(), record).await?;
    Ok(Json(SubmitResponse { success: true, id }))
}

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ApplicationRecord>>>, AppError> {
    let applications = list_applications(state.store.as_ref()).await?;
    Ok(DataResponse::ok(applications))
}

/// GET /api/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<ApplicationRecord>>, AppError> {
    let application = fetch_application(state.store.as_ref(), &id).await?;
    Ok(DataResponse::ok(application))
}

/// POST /api/generate-pdf
///
/// Renders the posted record as-is; nothing is stored.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let record = json_body(body)?;
    let assets = state.assets.clone();

    let pdf = tokio::task::spawn_blocking(move || render_application(&record, &assets))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in rendering: {e}")))??;
    tracing::info!("Rendered application PDF ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={PDF_FILE_NAME}"),
            ),
        ],
        pdf,
    ))
}
