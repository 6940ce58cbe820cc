//! Application state for the letters API

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::ApiConfig;

pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub async fn new(config: &ApiConfig) -> Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { db: pool })
    }

    /// Single-connection in-memory database, kept open for the pool's lifetime
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { db: pool })
    }

    async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Ensuring documents table...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                family TEXT NOT NULL,
                category_key TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_created_at ON documents(created_at)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
