// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::path::PathBuf;
use std::sync::Arc;

use cultivos::{GetSecretError, SecretProvider};
use internal_error::ResultIntoInternal;
use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct FileSecretProviderConfig {
    pub path: PathBuf,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads the API key from a mounted secret file (e.g. `/run/secrets/...`).
/// The file is re-read on every call so rotated secrets are picked up.
#[dill::component(pub)]
#[dill::interface(dyn SecretProvider)]
pub struct FileSecretProvider {
    config: Arc<FileSecretProviderConfig>,
}

#[async_trait::async_trait]
impl SecretProvider for FileSecretProvider {
    #[tracing::instrument(level = "debug", skip_all, fields(path = %self.config.path.display()))]
    async fn get_api_key(&self) -> Result<SecretString, GetSecretError> {
        let content = tokio::fs::read_to_string(&self.config.path)
            .await
            .context_int_err(format!("reading secret file {}", self.config.path.display()))?;

        let value = content.trim_end_matches(['\r', '\n']);

        if value.trim().is_empty() {
            return Err(GetSecretError::Empty {
                name: self.config.path.display().to_string(),
            });
        }

        Ok(SecretString::from(value.to_string()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
