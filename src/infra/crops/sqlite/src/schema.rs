// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::path::Path;

use internal_error::{InternalError, ResultIntoInternal};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const CREATE_CROP_CACHE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS crop_cache (
    key TEXT NOT NULL PRIMARY KEY,
    document TEXT NOT NULL
)
"#;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opens (creating if missing) the cache database file and ensures the schema
pub async fn open_sqlite_pool(path: &Path) -> Result<SqlitePool, InternalError> {
    tracing::info!(path = %path.display(), "Opening SQLite crops cache");

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context_int_err(format!("opening sqlite database {}", path.display()))?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Single-connection in-memory database, mostly useful in tests
pub async fn open_sqlite_pool_in_memory() -> Result<SqlitePool, InternalError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::new().in_memory(true))
        .await
        .int_err()?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), InternalError> {
    sqlx::query(CREATE_CROP_CACHE_TABLE)
        .execute(pool)
        .await
        .int_err()?;

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
