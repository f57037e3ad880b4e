// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use cultivos_inmem::InMemoryCropCacheRepository;
use dill::{Catalog, CatalogBuilder};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_get_missing_entry() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_get_missing_entry(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_put_then_get_round_trip() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_put_then_get_round_trip(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_put_overwrites_entry() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_put_overwrites_entry(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_corrupted_crops_reported_as_malformed() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_corrupted_crops_reported_as_malformed(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_empty_crops_reported_as_malformed() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_empty_crops_reported_as_malformed(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_put_replaces_malformed_entry() {
    let harness = InMemoryCropCacheRepositoryHarness::new();
    cultivos_repo_tests::test_put_replaces_malformed_entry(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct InMemoryCropCacheRepositoryHarness {
    catalog: Catalog,
}

impl InMemoryCropCacheRepositoryHarness {
    pub fn new() -> Self {
        let mut b = CatalogBuilder::new();
        b.add::<InMemoryCropCacheRepository>();

        Self { catalog: b.build() }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
