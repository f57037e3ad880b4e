// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::sync::Arc;

use cultivos::{
    AiClientError,
    CacheEntry,
    CacheLookup,
    CropCacheRepository,
    CropsAiClient,
    CropsRequest,
    CropsResponse,
    GetSecretError,
    InvalidLocationError,
    NormalizedKey,
    ResolveCropsError,
    ResolveCropsUseCase,
    SecretProvider,
};
use internal_error::{ErrorIntoInternal, InternalError};
use secrecy::SecretString;
use time_source::SystemTimeSource;

use crate::parse_crops;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component(pub)]
#[dill::interface(dyn ResolveCropsUseCase)]
pub struct ResolveCropsUseCaseImpl {
    cache_repo: Arc<dyn CropCacheRepository>,
    secret_provider: Arc<dyn SecretProvider>,
    ai_client: Arc<dyn CropsAiClient>,
    time_source: Arc<dyn SystemTimeSource>,
}

impl ResolveCropsUseCaseImpl {
    async fn lookup_cache(
        &self,
        key: &NormalizedKey,
    ) -> Result<Option<CacheEntry>, InternalError> {
        match self.cache_repo.get(key).await {
            Ok(Some(CacheLookup::Hit(entry))) => {
                tracing::info!(num_crops = entry.crops.len(), "Cache hit");
                Ok(Some(entry))
            }
            Ok(Some(CacheLookup::Malformed(malformed))) => {
                tracing::warn!(
                    reason = %malformed.reason,
                    "Cache entry is malformed, treating as a miss"
                );
                Ok(None)
            }
            Ok(None) => {
                tracing::info!("Cache miss");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(error = ?e, error_msg = %e, "Failed to read cache entry");
                Err(e)
            }
        }
    }

    async fn resolve_api_key(&self) -> Result<SecretString, InternalError> {
        self.secret_provider.get_api_key().await.map_err(|e| {
            tracing::error!(error = ?e, error_msg = %e, "Failed to resolve AI provider key");
            match e {
                GetSecretError::Internal(e) => e,
                e @ GetSecretError::Empty { .. } => e.int_err(),
            }
        })
    }

    async fn request_crops(
        &self,
        location: &str,
        api_key: &SecretString,
    ) -> Result<String, ResolveCropsError> {
        self.ai_client
            .request_crops(location, api_key)
            .await
            .map_err(|e| match e {
                AiClientError::Unavailable(e) => {
                    tracing::error!(error = ?e, error_msg = %e, "AI provider call failed");
                    ResolveCropsError::Unavailable(e)
                }
                AiClientError::Internal(e) => {
                    tracing::error!(error = ?e, error_msg = %e, "AI provider returned unexpected response");
                    ResolveCropsError::Internal(e)
                }
            })
    }

    async fn store_entry(&self, entry: &CacheEntry) {
        // The resolved value is returned even if it could not be persisted
        if let Err(e) = self.cache_repo.put(entry).await {
            tracing::error!(error = ?e, error_msg = %e, "Failed to write cache entry");
        } else {
            tracing::info!(num_crops = entry.crops.len(), "Cache entry stored");
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl ResolveCropsUseCase for ResolveCropsUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "ResolveCropsUseCaseImpl_execute",
        skip_all,
        fields(normalized_key = tracing::field::Empty)
    )]
    async fn execute(
        &self,
        request: serde_json::Value,
    ) -> Result<CropsResponse, ResolveCropsError> {
        let request = CropsRequest::from_payload(&request).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected crops request");
        })?;

        let Some(key) = NormalizedKey::try_normalize(&request.location) else {
            tracing::warn!(location = %request.location, "Location normalizes to an empty key");
            return Err(InvalidLocationError::NoKeyCharacters {
                location: request.location,
            }
            .into());
        };
        tracing::Span::current().record("normalized_key", key.as_str());

        if let Some(entry) = self.lookup_cache(&key).await? {
            return Ok(CropsResponse { crops: entry.crops });
        }

        let api_key = self.resolve_api_key().await?;
        let raw = self.request_crops(&request.location, &api_key).await?;

        let crops = parse_crops(&raw);
        if crops.is_empty() {
            tracing::info!("AI output contained no valid crops, nothing to cache");
            return Ok(CropsResponse::default());
        }

        let entry = CacheEntry {
            key,
            original_query: request.location,
            crops,
            retrieved_at: Some(self.time_source.now()),
        };
        self.store_entry(&entry).await;

        Ok(CropsResponse { crops: entry.crops })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
