// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use axum::Extension;
use dill::Catalog;
use observability::axum::{http_trace_layer, unknown_fallback_handler};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn root_router() -> axum::Router {
    axum::Router::new()
        .route(
            CROPS_BY_LOCATION_PATH,
            axum::routing::post(crops_by_location_handler),
        )
        .route(HEALTH_PATH, axum::routing::get(health_handler))
}

/// Full application with tracing, the catalog extension and the 404 fallback
pub fn build_app(catalog: Catalog) -> axum::Router {
    root_router()
        .fallback(unknown_fallback_handler)
        .layer(
            tower::ServiceBuilder::new()
                .layer(http_trace_layer())
                .layer(Extension(catalog)),
        )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
