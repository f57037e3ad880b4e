// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use cultivos::{CropsResponse, ResolveCropsUseCase};
use dill::Catalog;
use http_common::{ApiError, ResultIntoApiError};
use internal_error::ResultIntoInternal;
use serde_json::Value;

use super::{CallableResponse, unwrap_callable_payload};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const CROPS_BY_LOCATION_PATH: &str = "/obtenerCultivosPorUbicacion";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves crops common to `data.ubicacion`
pub async fn crops_by_location_handler(
    Extension(catalog): Extension<Catalog>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CallableResponse<CropsResponse>>, ApiError> {
    let Json(body) =
        body.map_err(|e| ApiError::invalid_argument_with_reason(e.body_text()))?;

    let use_case = catalog
        .get_one::<dyn ResolveCropsUseCase>()
        .int_err()
        .api_err()?;

    let response = use_case
        .execute(unwrap_callable_payload(body))
        .await
        .api_err()?;

    Ok(Json(CallableResponse { result: response }))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
