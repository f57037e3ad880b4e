// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::sync::Arc;

use cultivos::{GetSecretError, SecretProvider};
use internal_error::ResultIntoInternal;
use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct EnvSecretProviderConfig {
    pub var_name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads the API key from an environment variable on every call
#[dill::component(pub)]
#[dill::interface(dyn SecretProvider)]
pub struct EnvSecretProvider {
    config: Arc<EnvSecretProviderConfig>,
}

#[async_trait::async_trait]
impl SecretProvider for EnvSecretProvider {
    #[tracing::instrument(level = "debug", skip_all, fields(var_name = %self.config.var_name))]
    async fn get_api_key(&self) -> Result<SecretString, GetSecretError> {
        let value = std::env::var(&self.config.var_name)
            .context_int_err(format!("reading env var {}", self.config.var_name))?;

        if value.trim().is_empty() {
            return Err(GetSecretError::Empty {
                name: self.config.var_name.clone(),
            });
        }

        Ok(SecretString::from(value))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
