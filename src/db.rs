use std::sync::Arc;

use serde::Serialize;
use sqlx::{Connection, SqliteConnection};
use time::OffsetDateTime;

use crate::include_res;

/// Tables the handlers read and write. Applying it is left to the operator.
pub const SCHEMA: &str = include_res!(str, "/schema.sql");

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: String,
    pub comment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Where to find the store. Each request opens and closes its own connection.
#[derive(Debug, Clone)]
pub struct Database {
    url: Option<Arc<str>>,
}

impl Database {
    pub fn new(url: Option<String>) -> Self {
        Self { url: url.map(Arc::from) }
    }

    pub async fn connect(&self) -> anyhow::Result<SqliteConnection> {
        let Some(url) = self.url.as_deref() else {
            anyhow::bail!("DATABASE_URL is not set");
        };

        Ok(SqliteConnection::connect(url).await?)
    }
}

/// Closes a request's connection before the response goes out.
/// A failed close can't change the response any more, so it is only logged.
pub async fn release(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "failed to close database connection");
    }
}
