use crate::Result as DbErrorResult;

use log::info;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

fn default_path() -> String {
    "userdir.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

/// Connection settings for the SQLite-backed directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Database filename, or ":memory:" for an in-process database
    #[serde(default = "default_path")]
    pub path: String,

    /// Pool size; ":memory:" databases need exactly one connection
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Create the database file if it does not exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            create_if_missing: default_true(),
        }
    }
}

/// Builds a connection pool from `settings` and brings the schema up to date.
pub async fn connect(settings: &DatabaseSettings) -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&settings.path)
        .create_if_missing(settings.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("user directory database ready at {}", settings.path);

    Ok(pool)
}
