// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use cultivos::*;
use cultivos_adapter_http::build_app;
use dill::CatalogBuilder;
use http_body_util::BodyExt;
use internal_error::InternalError;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_success_uses_callable_envelope() {
    let mut use_case = MockResolveCropsUseCase::new();
    use_case
        .expect_execute()
        .withf(|request| *request == json!({ "ubicacion": "Mendoza" }))
        .times(1)
        .returning(|_| {
            Ok(CropsResponse {
                crops: vec![CropRecord::new("Vid", "Uva para vino")],
            })
        });

    let harness = CallableHarness::new(use_case);
    let (status, body) = harness
        .post(r#"{ "data": { "ubicacion": "Mendoza" } }"#)
        .await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "result": {
                "cultivos": [{ "nombre": "Vid", "descripcion": "Uva para vino" }]
            }
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_bare_payload_is_accepted() {
    let mut use_case = MockResolveCropsUseCase::new();
    use_case
        .expect_execute()
        .withf(|request| *request == json!({ "ubicacion": "Mendoza" }))
        .times(1)
        .returning(|_| Ok(CropsResponse::default()));

    let harness = CallableHarness::new(use_case);
    let (status, body) = harness.post(r#"{ "ubicacion": "Mendoza" }"#).await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body, json!({ "result": { "cultivos": [] } }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_malformed_body_is_invalid_argument() {
    let mut use_case = MockResolveCropsUseCase::new();
    use_case.expect_execute().never();

    let harness = CallableHarness::new(use_case);
    let (status, body) = harness.post(r#"{ "data": "#).await;

    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_error_status_mapping() {
    let cases: [(fn() -> ResolveCropsError, http::StatusCode, &str); 3] = [
        (
            || InvalidLocationError::Empty.into(),
            http::StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
        ),
        (
            || AiProviderUnavailableError::new("HTTP 500").into(),
            http::StatusCode::SERVICE_UNAVAILABLE,
            "UNAVAILABLE",
        ),
        (
            || InternalError::new("boom").into(),
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
        ),
    ];

    for (make_error, expected_status, expected_kind) in cases {
        let mut use_case = MockResolveCropsUseCase::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(move |_| Err(make_error()));

        let harness = CallableHarness::new(use_case);
        let (status, body) = harness.post(r#"{ "data": { "ubicacion": "x" } }"#).await;

        assert_eq!(status, expected_status);
        assert_eq!(body["error"]["status"], expected_kind);
        assert!(body["error"]["message"].is_string());
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct CallableHarness {
    app: axum::Router,
}

impl CallableHarness {
    fn new(use_case: MockResolveCropsUseCase) -> Self {
        let mut b = CatalogBuilder::new();
        b.add_value(use_case)
            .bind::<dyn ResolveCropsUseCase, MockResolveCropsUseCase>();

        Self {
            app: build_app(b.build()),
        }
    }

    async fn post(&self, body: &'static str) -> (http::StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                http::Request::post("/obtenerCultivosPorUbicacion")
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
