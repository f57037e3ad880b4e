// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use axum::response::IntoResponse;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Responds to requests that matched no route
pub async fn unknown_fallback_handler(uri: http::Uri) -> impl IntoResponse {
    tracing::warn!(%uri, "Unknown route");

    (
        http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "message": format!("No route for {}", uri.path())
        })),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Request span + response logging for HTTP servers
pub fn http_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
