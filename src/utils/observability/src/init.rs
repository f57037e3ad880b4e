// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug,sqlx=warn";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Failed to initialize logging: {reason}")]
pub struct InitLoggingError {
    reason: String,
}

impl InitLoggingError {
    fn new(reason: impl std::fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs the global tracing subscriber and redirects `log` records into it.
///
/// Filtering comes from `RUST_LOG` when set, otherwise from the config or
/// [`DEFAULT_LOG_FILTER`]. Returns `Ok(false)` without changes when a
/// subscriber is already installed (e.g. by the test harness).
pub fn init(config: &LoggingConfig) -> Result<bool, InitLoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(
            config
                .default_filter
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILTER),
        )
        .map_err(InitLoggingError::new)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let res = match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
    };
    res.map_err(InitLoggingError::new)?;

    Ok(true)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
