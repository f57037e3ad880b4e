// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use internal_error::InternalError;
use secrecy::SecretString;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Text-generation provider asked to list the crops of a location
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CropsAiClient: Send + Sync {
    /// Returns the raw model output for the crops prompt built from
    /// `location_text`. The output is not validated.
    async fn request_crops(
        &self,
        location_text: &str,
        api_key: &SecretString,
    ) -> Result<String, AiClientError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum AiClientError {
    #[error(transparent)]
    Unavailable(#[from] AiProviderUnavailableError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
#[error("AI provider is unavailable: {detail}")]
pub struct AiProviderUnavailableError {
    pub detail: String,
}

impl AiProviderUnavailableError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
