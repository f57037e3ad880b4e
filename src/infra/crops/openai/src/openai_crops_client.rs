// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::sync::Arc;
use std::time::Duration;

use cultivos::{AiClientError, AiProviderUnavailableError, CropsAiClient, build_crops_prompt};
use dill::{component, interface};
use internal_error::{ErrorIntoInternal, InternalError, ResultIntoInternal};
use secrecy::{ExposeSecret, SecretString};

use crate::wire::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const MAX_ERROR_BODY_EXCERPT: usize = 512;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout: Duration::from_secs(60),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct OpenAiCropsClient {
    config: Arc<OpenAiClientConfig>,
    http_client: reqwest::Client,
}

#[component(pub)]
#[interface(dyn CropsAiClient)]
impl OpenAiCropsClient {
    /// The HTTP client is shared so connections are reused across requests
    pub fn new(config: Arc<OpenAiClientConfig>, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn build_http_client() -> Result<reqwest::Client, InternalError> {
        reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .int_err()
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY_EXCERPT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CropsAiClient for OpenAiCropsClient {
    #[tracing::instrument(level = "debug", skip_all, fields(model = %self.config.model))]
    async fn request_crops(
        &self,
        location_text: &str,
        api_key: &SecretString,
    ) -> Result<String, AiClientError> {
        let prompt = build_crops_prompt(location_text);

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timeout" } else { "transport" };
                AiProviderUnavailableError::new(format!("{kind} error: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = excerpt(&body), "AI provider rejected the request");

            return Err(AiProviderUnavailableError::new(format!(
                "HTTP {status}: {}",
                excerpt(&body)
            ))
            .into());
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                // Body was cut short by the timeout
                if e.is_timeout() {
                    AiClientError::Unavailable(AiProviderUnavailableError::new(format!(
                        "timeout error: {e}"
                    )))
                } else {
                    AiClientError::Internal(e.int_err())
                }
            })?;

        let Some(content) = completion.into_first_content() else {
            return Err(InternalError::new("AI response has no message content").into());
        };

        tracing::debug!(content_len = content.len(), "Received AI completion");

        Ok(content)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
