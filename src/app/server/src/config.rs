// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use duration_string::DurationString;
use internal_error::{InternalError, ResultIntoInternal};
use observability::config::LoggingConfig;
use serde::{Deserialize, Serialize};

use crate::Cli;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    pub http: HttpConfig,
    pub ai: AiConfig,
    pub secret: SecretConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Reads the config file if given, otherwise returns defaults
    pub fn load(path: Option<&Path>) -> Result<Self, InternalError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = std::fs::File::open(path)
            .context_int_err(format!("opening config file {}", path.display()))?;

        serde_yaml::from_reader(file)
            .context_int_err(format!("parsing config file {}", path.display()))
    }

    pub fn apply_overrides(mut self, cli: &Cli) -> Self {
        if let Some(address) = cli.address {
            self.http.address = address;
        }
        if let Some(port) = cli.port {
            self.http.port = port;
        }
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// HTTP
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HttpConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl HttpConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// AI provider
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AiConfig {
    /// Root of an OpenAI-compatible API
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound for a single provider call, e.g. `60s`
    pub timeout: DurationString,
}

impl Default for AiConfig {
    fn default() -> Self {
        let defaults = cultivos_openai::OpenAiClientConfig::default();
        Self {
            base_url: defaults.base_url,
            model: defaults.model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            timeout: DurationString::new(defaults.timeout),
        }
    }
}

impl From<AiConfig> for cultivos_openai::OpenAiClientConfig {
    fn from(value: AiConfig) -> Self {
        Self {
            base_url: value.base_url,
            model: value.model,
            temperature: value.temperature,
            max_tokens: value.max_tokens,
            timeout: Duration::from(value.timeout),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Secret
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SecretConfig {
    /// Environment variable holding the API key
    Env { var: String },
    /// Mounted file holding the API key
    File { path: PathBuf },
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self::Env {
            var: "OPENAI_API_KEY".to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Cache
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CacheConfig {
    /// Lost on restart
    #[default]
    InMemory,
    Sqlite { path: PathBuf },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
