// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cultivos::*;
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    documents: HashMap<NormalizedKey, serde_json::Value>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryCropCacheRepository {
    state: Arc<Mutex<State>>,
}

#[dill::component(pub)]
#[dill::interface(dyn CropCacheRepository)]
#[dill::scope(dill::Singleton)]
impl InMemoryCropCacheRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CropCacheRepository for InMemoryCropCacheRepository {
    async fn get(&self, key: &NormalizedKey) -> Result<Option<CacheLookup>, InternalError> {
        let guard = self.state.lock().unwrap();

        Ok(guard
            .documents
            .get(key)
            .map(|document| CacheDocument(document.clone()).interpret(key)))
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
        let mut guard = self.state.lock().unwrap();
        guard.documents.insert(key.clone(), document.into_inner());
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
