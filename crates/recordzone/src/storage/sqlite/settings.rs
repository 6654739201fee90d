//! SQLite settings store.
//!
//! Implements `SettingsStore` from `recordzone_core::storage` on a single
//! `settings` table, so flags survive process restarts.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use recordzone_core::storage::{Result, SettingsStore, StoreError};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed settings store.
pub struct SqliteSettingsStore {
    conn: Connection,
}

impl SqliteSettingsStore {
    /// Opens (or creates) the settings database at `path`.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a settings store backed by an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get_flag(&self, key: &str) -> Result<bool> {
        let key_str = key.to_string();

        let value = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_SETTING).map_err(wrap_err)?;
                let value = match stmt.query_row([&key_str], |row| row.get::<_, String>(0)) {
                    Ok(value) => Some(value),
                    Err(rusqlite::Error::QueryReturnedNoRows) => None,
                    Err(e) => return Err(wrap_err(e)),
                };
                Ok(value)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        match value {
            None => Ok(false),
            Some(value) => schema::parse_flag(&value).ok_or_else(|| {
                StoreError::InvalidData(format!("Setting {key} is not a flag: {value}"))
            }),
        }
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        let key_str = key.to_string();
        let value_str = schema::format_flag(value);

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPSERT_SETTING, rusqlite::params![key_str, value_str])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!(key = %key, value, "Setting written");
        Ok(())
    }
}
