// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::{CropRecord, NormalizedKey};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Persisted outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: NormalizedKey,
    pub original_query: String,
    pub crops: Vec<CropRecord>,
    /// Absent for documents written by other tools
    pub retrieved_at: Option<DateTime<Utc>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Result of reading an existing cache document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(CacheEntry),
    Malformed(MalformedCacheEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cache entry '{key}' is malformed: {reason}")]
pub struct MalformedCacheEntry {
    pub key: NormalizedKey,
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Raw JSON document as kept by cache stores:
///
/// ```json
/// { "nombreOriginal": "...", "cultivos": [...], "fechaConsulta": "..." }
/// ```
///
/// Stores keep documents as-is so that entries written out-of-band can be
/// inspected and reported as malformed instead of failing the read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDocument(pub Value);

impl CacheDocument {
    pub const FIELD_ORIGINAL_QUERY: &'static str = "nombreOriginal";
    pub const FIELD_CROPS: &'static str = "cultivos";
    pub const FIELD_RETRIEVED_AT: &'static str = "fechaConsulta";

    pub fn from_entry(entry: &CacheEntry) -> Self {
        let mut doc = Map::new();

        doc.insert(
            Self::FIELD_ORIGINAL_QUERY.to_string(),
            Value::String(entry.original_query.clone()),
        );
        doc.insert(Self::FIELD_CROPS.to_string(), json!(entry.crops));
        if let Some(retrieved_at) = entry.retrieved_at {
            doc.insert(
                Self::FIELD_RETRIEVED_AT.to_string(),
                Value::String(retrieved_at.to_rfc3339()),
            );
        }

        Self(Value::Object(doc))
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn interpret(&self, key: &NormalizedKey) -> CacheLookup {
        match self.try_interpret(key) {
            Ok(entry) => CacheLookup::Hit(entry),
            Err(reason) => CacheLookup::Malformed(MalformedCacheEntry {
                key: key.clone(),
                reason,
            }),
        }
    }

    fn try_interpret(&self, key: &NormalizedKey) -> Result<CacheEntry, String> {
        let Some(doc) = self.0.as_object() else {
            return Err("document is not an object".to_string());
        };

        let crops = match doc.get(Self::FIELD_CROPS) {
            None => return Err("field 'cultivos' is missing".to_string()),
            Some(Value::Array(items)) if items.is_empty() => {
                return Err("field 'cultivos' is empty".to_string());
            }
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    CropRecord::from_json(item)
                        .ok_or_else(|| format!("record {i} of 'cultivos' is invalid"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err("field 'cultivos' is not an array".to_string()),
        };

        let original_query = doc
            .get(Self::FIELD_ORIGINAL_QUERY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let retrieved_at = doc
            .get(Self::FIELD_RETRIEVED_AT)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(CacheEntry {
            key: key.clone(),
            original_query,
            crops,
            retrieved_at,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
