// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use cultivos::*;
use dill::{component, interface};
use internal_error::{InternalError, ResultIntoInternal};
use sqlx::{Row, SqlitePool};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SqliteCropCacheRepository {
    pool: SqlitePool,
}

#[component(pub)]
#[interface(dyn CropCacheRepository)]
impl SqliteCropCacheRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CropCacheRepository for SqliteCropCacheRepository {
    async fn get(&self, key: &NormalizedKey) -> Result<Option<CacheLookup>, InternalError> {
        let maybe_row = sqlx::query(
            r#"
            SELECT document FROM crop_cache WHERE key = $1
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .int_err()?;

        let Some(row) = maybe_row else {
            return Ok(None);
        };

        let raw: String = row.try_get("document").int_err()?;

        let lookup = match serde_json::from_str(&raw) {
            Ok(document) => CacheDocument(document).interpret(key),
            Err(e) => CacheLookup::Malformed(MalformedCacheEntry {
                key: key.clone(),
                reason: format!("document is not valid JSON: {e}"),
            }),
        };

        Ok(Some(lookup))
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), InternalError> {
        self.put_document(&entry.key, CacheDocument::from_entry(entry))
            .await
    }

    async fn put_document(
        &self,
        key: &NormalizedKey,
        document: CacheDocument,
    ) -> Result<(), InternalError> {
        let raw = serde_json::to_string(&document.0).int_err()?;

        sqlx::query(
            r#"
            INSERT INTO crop_cache (key, document) VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE SET document = excluded.document
            "#,
        )
        .bind(key.as_str())
        .bind(raw)
        .execute(&self.pool)
        .await
        .int_err()?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
