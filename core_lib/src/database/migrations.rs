use sqlx::SqlitePool;
use tracing::info;

use crate::error::{AppError, Result};

/// Creates the document table on startup. The schema is a single
/// append-only table; there is no versioned migration history.
pub async fn run_migrations(pool: SqlitePool) -> Result<()> {
    info!("Ensuring document schema exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            body TEXT NOT NULL
        )
    "#,
    )
    .execute(&pool)
    .await
    .map_err(AppError::from)?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection)",
    )
    .execute(&pool)
    .await
    .map_err(AppError::from)?;

    info!("Document schema ready");
    Ok(())
}
