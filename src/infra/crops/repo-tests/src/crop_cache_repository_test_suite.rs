// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use cultivos::*;
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_get_missing_entry(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let lookup = harness.repo.get(&key("Nowhere Land")).await.unwrap();

    assert_eq!(lookup, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_put_then_get_round_trip(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let entry = make_entry(
        "Valle del Cauca, Colombia",
        &[
            ("Caña de azúcar", "Cultivo principal del valle"),
            ("Café", "Cultivado en las laderas"),
            ("Plátano", "Común en zonas cálidas"),
        ],
    );

    harness.repo.put(&entry).await.unwrap();

    assert_eq!(
        harness.repo.get(&entry.key).await.unwrap(),
        Some(CacheLookup::Hit(entry.clone()))
    );
    assert_eq!(harness.repo.get(&key("Valle")).await.unwrap(), None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_put_overwrites_entry(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let first = make_entry("Mendoza", &[("Vid", "Uva para vino")]);
    let second = make_entry(
        "  MENDOZA ",
        &[("Olivo", "Aceitunas"), ("Ajo", "Exportación")],
    );
    assert_eq!(first.key, second.key);

    harness.repo.put(&first).await.unwrap();
    harness.repo.put(&second).await.unwrap();

    assert_eq!(
        harness.repo.get(&first.key).await.unwrap(),
        Some(CacheLookup::Hit(second))
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_corrupted_crops_reported_as_malformed(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let key = key("Quito");
    harness
        .repo
        .put_document(
            &key,
            CacheDocument(json!({
                "nombreOriginal": "Quito",
                "cultivos": "corrupted",
            })),
        )
        .await
        .unwrap();

    let lookup = harness.repo.get(&key).await.unwrap();

    assert!(
        matches!(&lookup, Some(CacheLookup::Malformed(m)) if m.key == key),
        "{lookup:?}"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_empty_crops_reported_as_malformed(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let key = key("Lima");
    harness
        .repo
        .put_document(&key, CacheDocument(json!({ "cultivos": [] })))
        .await
        .unwrap();

    let lookup = harness.repo.get(&key).await.unwrap();

    assert!(
        matches!(&lookup, Some(CacheLookup::Malformed(_))),
        "{lookup:?}"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_put_replaces_malformed_entry(catalog: &dill::Catalog) {
    let harness = CropCacheRepositoryTestSuiteHarness::new(catalog);

    let entry = make_entry("Cusco", &[("Papa", "Cientos de variedades nativas")]);
    harness
        .repo
        .put_document(&entry.key, CacheDocument(json!({ "cultivos": 42 })))
        .await
        .unwrap();

    harness.repo.put(&entry).await.unwrap();

    assert_eq!(
        harness.repo.get(&entry.key).await.unwrap(),
        Some(CacheLookup::Hit(entry))
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct CropCacheRepositoryTestSuiteHarness {
    repo: Arc<dyn CropCacheRepository>,
}

impl CropCacheRepositoryTestSuiteHarness {
    fn new(catalog: &dill::Catalog) -> Self {
        Self {
            repo: catalog.get_one().unwrap(),
        }
    }
}

fn key(location: &str) -> NormalizedKey {
    NormalizedKey::try_normalize(location).unwrap()
}

fn make_entry(location: &str, crops: &[(&str, &str)]) -> CacheEntry {
    CacheEntry {
        key: key(location),
        original_query: location.to_string(),
        crops: crops
            .iter()
            .map(|(name, description)| CropRecord::new(*name, *description))
            .collect(),
        retrieved_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
