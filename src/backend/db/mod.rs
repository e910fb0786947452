//! Database Module
//!
//! Opens the SQLite pool shared by every handler and applies the schema.
//!
//! Foreign keys are switched on for every connection so that deleting a
//! user or a post cascades to the rows that reference it. An in-memory
//! database only exists as long as its connection, so such pools are
//! pinned to one connection that is never recycled.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::server::config::ServerConfig;

const SCHEMA: &str = include_str!("schema.sql");

/// Open the connection pool described by `config` and apply the schema.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = config.is_in_memory();

    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    tracing::info!("Connecting to database {}", config.database_url);
    let pool = pool_options.connect_with(options).await?;

    init_schema(&pool).await?;
    tracing::info!("Database schema ready");

    Ok(pool)
}

/// Create all tables and indexes if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
