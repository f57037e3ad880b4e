// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use cultivos_openai::{OpenAiClientConfig, OpenAiCropsClient};
use cultivos_services::{
    EnvSecretProvider,
    EnvSecretProviderConfig,
    FileSecretProvider,
    FileSecretProviderConfig,
};
use dill::{Catalog, CatalogBuilder};
use internal_error::{InternalError, ResultIntoInternal};

use crate::{CacheConfig, Cli, SecretConfig, ServerConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(cli: Cli) -> Result<(), InternalError> {
    let config = ServerConfig::load(cli.config.as_deref())?.apply_overrides(&cli);

    observability::init::init(&config.logging).int_err()?;
    observability::panic_handler::set_hook_trace_panics(true);

    tracing::info!(
        version = VERSION,
        config_path = ?cli.config,
        ?config,
        "Starting {BINARY_NAME}"
    );

    let catalog = build_catalog(&config).await?;
    let app = cultivos_adapter_http::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.http.socket_addr())
        .await
        .context_int_err(format!("binding {}", config.http.socket_addr()))?;

    tracing::info!(local_addr = %listener.local_addr().int_err()?, "HTTP server is listening");

    let shutdown = shutdown_signal()?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .int_err()?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn build_catalog(config: &ServerConfig) -> Result<Catalog, InternalError> {
    let mut b = CatalogBuilder::new();
    configure_base_catalog(&mut b, config).await?;
    Ok(b.build())
}

pub async fn configure_base_catalog(
    b: &mut CatalogBuilder,
    config: &ServerConfig,
) -> Result<(), InternalError> {
    b.add::<time_source::SystemTimeSourceDefault>();

    cultivos_services::register_dependencies(b);

    match &config.cache {
        CacheConfig::InMemory => {
            b.add::<cultivos_inmem::InMemoryCropCacheRepository>();
        }
        CacheConfig::Sqlite { path } => {
            let pool = cultivos_sqlite::open_sqlite_pool(path).await?;
            b.add_value(pool);
            b.add::<cultivos_sqlite::SqliteCropCacheRepository>();
        }
    }

    match &config.secret {
        SecretConfig::Env { var } => {
            b.add_value(EnvSecretProviderConfig {
                var_name: var.clone(),
            });
            b.add::<EnvSecretProvider>();
        }
        SecretConfig::File { path } => {
            b.add_value(FileSecretProviderConfig { path: path.clone() });
            b.add::<FileSecretProvider>();
        }
    }

    b.add_value(OpenAiClientConfig::from(config.ai.clone()));
    b.add_value(OpenAiCropsClient::build_http_client()?);
    b.add::<OpenAiCropsClient>();

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves on Ctrl-C or SIGTERM. Handlers are registered before returning, so
/// a signal arriving after this call is never lost.
#[cfg(unix)]
pub fn shutdown_signal() -> Result<impl Future<Output = ()>, InternalError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate()).int_err()?;

    Ok(async move {
        tokio::select! {
            res = tokio::signal::ctrl_c() => match res {
                Ok(()) => tracing::info!("Received interrupt signal"),
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to listen for interrupt signal");
                    terminate.recv().await;
                    tracing::info!("Received terminate signal");
                }
            },
            _ = terminate.recv() => tracing::info!("Received terminate signal"),
        }
    })
}

#[cfg(not(unix))]
pub fn shutdown_signal() -> Result<impl Future<Output = ()>, InternalError> {
    Ok(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received interrupt signal"),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to listen for interrupt signal");
                std::future::pending::<()>().await;
            }
        }
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
