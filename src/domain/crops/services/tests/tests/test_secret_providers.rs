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
use cultivos_services::*;
use dill::CatalogBuilder;
use secrecy::ExposeSecret;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_file_secret_provider_trims_trailing_newline() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("api-key");
    std::fs::write(&path, "sk-test-123\n").unwrap();

    let provider = file_provider(path);
    let key = provider.get_api_key().await.unwrap();

    assert_eq!(key.expose_secret(), "sk-test-123");
}

#[test_log::test(tokio::test)]
async fn test_file_secret_provider_empty_payload() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("api-key");
    std::fs::write(&path, "\n").unwrap();

    let res = file_provider(path).get_api_key().await;

    assert!(matches!(res, Err(GetSecretError::Empty { .. })), "{res:?}");
}

#[test_log::test(tokio::test)]
async fn test_file_secret_provider_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    let res = file_provider(temp_dir.path().join("absent")).get_api_key().await;

    assert!(matches!(res, Err(GetSecretError::Internal(_))), "{res:?}");
}

#[test_log::test(tokio::test)]
async fn test_env_secret_provider_missing_var() {
    let provider = env_provider("CULTIVOS_TEST_SURELY_UNDEFINED_VAR");

    let res = provider.get_api_key().await;

    assert!(matches!(res, Err(GetSecretError::Internal(_))), "{res:?}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn file_provider(path: std::path::PathBuf) -> Arc<dyn SecretProvider> {
    let mut b = CatalogBuilder::new();
    b.add_value(FileSecretProviderConfig { path });
    b.add::<FileSecretProvider>();
    b.build().get_one().unwrap()
}

fn env_provider(var_name: &str) -> Arc<dyn SecretProvider> {
    let mut b = CatalogBuilder::new();
    b.add_value(EnvSecretProviderConfig {
        var_name: var_name.to_string(),
    });
    b.add::<EnvSecretProvider>();
    b.build().get_one().unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
