//! Document store: the persistence adapter for canonical records.
//!
//! Records are stored as one JSON body per row, keyed by collection
//! name. The SQLite rowid is the store-internal identifier; reads
//! select only the body so it never appears in results. The API is
//! append-only: no update or delete surface.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use tracing::error;

use crate::error::{AppError, Result};

/// Hard cap on a single bounded fetch.
pub const LIST_CAP: i64 = 1000;

#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Appends one record to the collection. The record serializes to a
    /// JSON body with its timestamp already rendered as an RFC 3339
    /// string; the store itself has no timestamp type.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> Result<()>
    where
        T: Serialize,
    {
        let body = serde_json::to_string(record)?;

        sqlx::query("INSERT INTO documents (collection, body) VALUES (?, ?)")
            .bind(collection)
            .bind(body)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Fetches up to `limit` records (capped at [`LIST_CAP`]) in
    /// insertion order. Returns an empty Vec for an empty collection.
    pub async fn list<T>(&self, collection: &str, limit: i64) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let limit = limit.min(LIST_CAP);

        let rows = sqlx::query(
            "SELECT body FROM documents WHERE collection = ? ORDER BY id ASC LIMIT ?",
        )
        .bind(collection)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let body: String = row.try_get("body").map_err(AppError::from)?;
            let record = serde_json::from_str(&body).map_err(|e| {
                error!("Malformed document in collection '{}': {}", collection, e);
                AppError::Storage(format!("malformed document in '{}'", collection))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Liveness probe used by the healthcheck endpoint.
    pub async fn health_check(&self) -> Result<()> {
        let row = sqlx::query("SELECT 1 as probe")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Store health check failed: {}", e);
                AppError::from(e)
            })?;

        let probe: i32 = row.try_get("probe").map_err(AppError::from)?;
        if probe == 1 {
            Ok(())
        } else {
            Err(AppError::Storage("health probe returned no rows".to_string()))
        }
    }

    /// Closes the pool. Called exactly once, after the server has
    /// drained during graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
