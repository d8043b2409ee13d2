use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::applications::record::ApplicationRecord;

/// Status every application starts in. Nothing in this service moves it on.
pub const INITIAL_STATUS: &str = "pending";

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// The submitted record, minus server-owned keys.
    pub data: Value,
}

impl ApplicationRow {
    pub fn new(record: ApplicationRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: INITIAL_STATUS.to_string(),
            created_at,
            data: record.into_value(),
        }
    }

    /// Flattens the row into the single object the API returns.
    pub fn into_record(self) -> ApplicationRecord {
        let mut record = ApplicationRecord::from_value(self.data);
        record.set("id", self.id.to_string());
        record.set(
            "created_at",
            self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        record.set("status", self.status);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_record_flattens_server_fields() {
        let created_at = Utc::now();
        let row = ApplicationRow::new(
            ApplicationRecord::from_value(json!({ "firstNameEn": "Anan" })),
            created_at,
        );
        let id = row.id;
        let record = row.into_record();

        assert_eq!(record.display("firstNameEn"), "Anan");
        assert_eq!(record.display("id"), id.to_string());
        assert_eq!(record.display("status"), INITIAL_STATUS);
        assert!(record.display("created_at").ends_with('Z'));
    }

    #[test]
    fn test_into_record_tolerates_non_object_data() {
        let row = ApplicationRow {
            id: Uuid::new_v4(),
            status: INITIAL_STATUS.to_string(),
            created_at: Utc::now(),
            data: json!(["not", "an", "object"]),
        };
        let record = row.into_record();
        assert_eq!(record.len(), 3);
    }
}
