use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

#[derive(Clone)]
pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    pub(crate) busy_timeout_ms: u64,
    pub(crate) journal_mode: String,
    pub(crate) synchronous: String,
}

impl Database {
    /// Opens the database described by `config` and applies its pragmas.
    ///
    /// Pragma values come from the injected config, not the process
    /// environment; unrecognized journal/synchronous values are normalized
    /// to safe defaults before use.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let db = if config.url.starts_with("libsql://") || config.url.starts_with("https://") {
            if let Some(ref local_path) = config.local_path {
                Builder::new_remote_replica(
                    local_path,
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            } else {
                Builder::new_remote(
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            }
        } else if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let database = Self {
            db: Arc::new(db),
            busy_timeout_ms: config.busy_timeout_ms,
            journal_mode: normalize_journal_mode(&config.journal_mode).to_string(),
            synchronous: normalize_synchronous(&config.synchronous).to_string(),
        };
        database.configure_database().await?;
        database.init_schema().await?;

        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    async fn configure_database(&self) -> Result<()> {
        let conn = self.connect()?;

        let busy_timeout_sql = format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms);
        if let Err(error) = conn.execute_batch(&busy_timeout_sql).await {
            tracing::warn!(
                busy_timeout_ms = self.busy_timeout_ms,
                error = %error,
                "Failed to set SQLite busy_timeout"
            );
        }

        let journal_sql = format!("PRAGMA journal_mode = {}", self.journal_mode);
        if let Err(error) = conn.execute_batch(&journal_sql).await {
            tracing::warn!(
                mode = %self.journal_mode,
                error = %error,
                "Failed to set SQLite journal_mode"
            );
        }

        let synchronous_sql = format!("PRAGMA synchronous = {}", self.synchronous);
        if let Err(error) = conn.execute_batch(&synchronous_sql).await {
            tracing::warn!(
                mode = %self.synchronous,
                error = %error,
                "Failed to set SQLite synchronous pragma"
            );
        }

        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await?;
        Ok(())
    }
}

fn normalize_journal_mode(value: &str) -> &'static str {
    match value.trim().to_uppercase().as_str() {
        "DELETE" => "DELETE",
        "TRUNCATE" => "TRUNCATE",
        "PERSIST" => "PERSIST",
        "MEMORY" => "MEMORY",
        "WAL" => "WAL",
        "OFF" => "OFF",
        _ => "WAL",
    }
}

fn normalize_synchronous(value: &str) -> &'static str {
    match value.trim().to_uppercase().as_str() {
        "OFF" => "OFF",
        "NORMAL" => "NORMAL",
        "FULL" => "FULL",
        "EXTRA" => "EXTRA",
        _ => "NORMAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
            busy_timeout_ms: 5000,
            journal_mode: "WAL".to_string(),
            synchronous: "NORMAL".to_string(),
        }
    }

    #[test]
    fn journal_mode_falls_back_to_wal() {
        assert_eq!(normalize_journal_mode("bogus"), "WAL");
        assert_eq!(normalize_journal_mode(" wal "), "WAL");
        assert_eq!(normalize_journal_mode("memory"), "MEMORY");
    }

    #[test]
    fn synchronous_falls_back_to_normal() {
        assert_eq!(normalize_synchronous("bogus"), "NORMAL");
        assert_eq!(normalize_synchronous("full"), "FULL");
    }

    #[tokio::test]
    async fn pragma_settings_come_from_config() {
        let config = DatabaseConfig {
            busy_timeout_ms: 250,
            journal_mode: "memory".to_string(),
            synchronous: "full".to_string(),
            ..memory_config()
        };
        let db = Database::new(&config).await.expect("in-memory db");

        assert_eq!(db.busy_timeout_ms, 250);
        assert_eq!(db.journal_mode, "MEMORY");
        assert_eq!(db.synchronous, "FULL");
    }

    #[tokio::test]
    async fn unrecognized_pragma_values_are_normalized() {
        let config = DatabaseConfig {
            journal_mode: "bogus".to_string(),
            synchronous: "bogus".to_string(),
            ..memory_config()
        };
        let db = Database::new(&config).await.expect("in-memory db");

        assert_eq!(db.journal_mode, "WAL");
        assert_eq!(db.synchronous, "NORMAL");
    }

    #[tokio::test]
    async fn in_memory_database_initializes_schema() {
        let db = Database::new(&memory_config()).await.expect("in-memory db");
        let conn = db.connect().expect("connection");

        // users table exists after init
        let mut rows = conn
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'users'",
                (),
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }
}
