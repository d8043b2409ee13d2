//! Application persistence.
//!
//! `AppState` holds an `Arc<dyn ApplicationStore>`; production uses
//! `PgApplicationStore`, tests use the in-memory store below.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::ApplicationRow;

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Persists a new row and returns its id. Rows are never updated.
    async fn insert(&self, row: ApplicationRow) -> Result<Uuid, AppError>;

    /// All rows, newest `created_at` first.
    async fn list(&self) -> Result<Vec<ApplicationRow>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<ApplicationRow>, AppError>;
}

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(&self, row: ApplicationRow) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO applications (id, status, created_at, data)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(row.id)
        .bind(&row.status)
        .bind(row.created_at)
        .bind(&row.data)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted application {id}");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<ApplicationRow>, AppError> {
        Ok(sqlx::query_as::<_, ApplicationRow>(
            "SELECT id, status, created_at, data FROM applications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ApplicationRow>, AppError> {
        Ok(sqlx::query_as::<_, ApplicationRow>(
            "SELECT id, status, created_at, data FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
