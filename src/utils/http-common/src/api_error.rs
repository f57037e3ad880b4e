// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use cultivos::{CropsErrorKind, ResolveCropsError};
use internal_error::InternalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// This type is used to simplify error handling in HTTP handlers and unify
/// logging of API errors.
///
/// The typical usage pattern is:
///
/// ```
/// async fn handler() -> Result<(), ApiError> {
///     operation().await.api_err()?;
///     Ok(())
/// }
/// ````
///
/// A conversion between the domain error and [`ApiError`] has to exist. We on
/// purpose avoid [From] and [Into] traits and using [`IntoApiError`] instead as
/// we want this conversion to be explicit - it's too easy to put a question
/// mark operator on a fallible operation without thinking what it will actually
/// do.
///
/// Errors are rendered using the callable-function envelope:
///
/// ```json
/// { "error": { "status": "INVALID_ARGUMENT", "message": "..." } }
/// ```
#[derive(Debug, Error)]
#[error("api error {status:?}")]
pub struct ApiError {
    pub status: CallableStatus,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl ApiError {
    pub fn new(
        source: impl std::error::Error + Send + Sync + 'static,
        status: CallableStatus,
    ) -> Self {
        Self {
            status,
            source: source.into(),
        }
    }

    pub fn invalid_argument_with_reason(reason: impl Into<String>) -> Self {
        Self {
            source: Into::<String>::into(reason).into(),
            status: CallableStatus::InvalidArgument,
        }
    }

    pub fn not_found_without_reason() -> Self {
        Self {
            source: "Not Found".into(),
            status: CallableStatus::NotFound,
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(e: InternalError) -> Self {
        e.api_err()
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // TODO: Logging as a side effect of conversion is not great - we should move
        // this into a middleware
        let message = if self.status == CallableStatus::Internal {
            tracing::error!(
                error = ?self.source,
                error_msg = %self.source,
                status = %self.status,
                "Internal API error",
            );
            // Upstream details stay in the logs
            "Internal error".to_string()
        } else {
            tracing::warn!(
                error = ?self.source,
                error_msg = %self.source,
                status = %self.status,
                "API error",
            );
            self.source.to_string()
        };

        let response_body = axum::response::Json(ApiErrorResponse {
            error: ApiErrorBody {
                status: self.status,
                message,
            },
        });

        (self.status.status_code(), response_body).into_response()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Machine-readable error kinds of the callable protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableStatus {
    InvalidArgument,
    NotFound,
    Unavailable,
    Internal,
}

impl CallableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Unavailable => "UNAVAILABLE",
            Self::Internal => "INTERNAL",
        }
    }

    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidArgument => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Unavailable => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for CallableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CropsErrorKind> for CallableStatus {
    fn from(value: CropsErrorKind) -> Self {
        match value {
            CropsErrorKind::InvalidArgument => Self::InvalidArgument,
            CropsErrorKind::Unavailable => Self::Unavailable,
            CropsErrorKind::Internal => Self::Internal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub status: CallableStatus,
    pub message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Provides explicit conversion into [`ApiError`].
pub trait IntoApiError {
    fn api_err(self) -> ApiError;
}

/// Allows using `.api_err()` method on [Result] types.
pub trait ResultIntoApiError<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError>;
}

impl<K, E> ResultIntoApiError<K, E> for Result<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.api_err()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl IntoApiError for InternalError {
    fn api_err(self) -> ApiError {
        ApiError::new(self, CallableStatus::Internal)
    }
}

impl IntoApiError for ResolveCropsError {
    fn api_err(self) -> ApiError {
        let status = CallableStatus::from(self.kind());
        ApiError::new(self, status)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
