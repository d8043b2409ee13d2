use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::applications::record::ApplicationRecord;
use crate::applications::store::ApplicationStore;
use crate::errors::AppError;
use crate::models::application::ApplicationRow;

/// Stores a submitted record as a new pending application.
///
/// The only transformation applied is integer coercion; everything else is
/// stored exactly as received.
pub async fn submit_application(
    store: &dyn ApplicationStore,
    mut record: ApplicationRecord,
) -> Result<Uuid, AppError> {
    record.strip_server_fields();
    if record.is_empty() {
        warn!("Empty application submitted");
    }
    record.coerce_integer_fields();

    let fields = record.len();
    let row = ApplicationRow::new(record, Utc::now());
    let id = store.insert(row).await?;
    info!("Application {id} submitted with {fields} fields");
    Ok(id)
}

pub async fn list_applications(
    store: &dyn ApplicationStore,
) -> Result<Vec<ApplicationRecord>, AppError> {
    let rows = store.list().await?;
    Ok(rows.into_iter().map(ApplicationRow::into_record).collect())
}

/// Fetches one application. A malformed id is treated like a missing one.
pub async fn fetch_application(
    store: &dyn ApplicationStore,
    id: &str,
) -> Result<ApplicationRecord, AppError> {
    let uuid = Uuid::parse_str(id).map_err(|_| AppError::NotFound(id.to_string()))?;
    store
        .get(uuid)
        .await?
        .map(ApplicationRow::into_record)
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}
