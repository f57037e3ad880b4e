// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use internal_error::InternalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AiProviderUnavailableError, CropRecord};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves the crops common to a free-form location, serving repeated
/// queries for the same normalized location from the cache
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait ResolveCropsUseCase: Send + Sync {
    /// Accepts the request payload `{ "ubicacion": "..." }` as a dynamic
    /// value so that missing or mistyped fields surface as
    /// [`ResolveCropsError::InvalidArgument`]
    async fn execute(&self, request: serde_json::Value)
    -> Result<CropsResponse, ResolveCropsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropsRequest {
    pub location: String,
}

impl CropsRequest {
    pub const FIELD_LOCATION: &'static str = "ubicacion";

    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, InvalidLocationError> {
        let location = payload
            .get(Self::FIELD_LOCATION)
            .ok_or(InvalidLocationError::Missing)?
            .as_str()
            .ok_or(InvalidLocationError::NotAString)?;

        if location.trim().is_empty() {
            return Err(InvalidLocationError::Empty);
        }

        Ok(Self {
            location: location.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropsResponse {
    #[serde(rename = "cultivos")]
    pub crops: Vec<CropRecord>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum ResolveCropsError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidLocationError),

    #[error(transparent)]
    Unavailable(#[from] AiProviderUnavailableError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl ResolveCropsError {
    pub fn kind(&self) -> CropsErrorKind {
        match self {
            Self::InvalidArgument(_) => CropsErrorKind::InvalidArgument,
            Self::Unavailable(_) => CropsErrorKind::Unavailable,
            Self::Internal(_) => CropsErrorKind::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropsErrorKind {
    InvalidArgument,
    Unavailable,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLocationError {
    #[error("Field 'ubicacion' is required")]
    Missing,

    #[error("Field 'ubicacion' must be a string")]
    NotAString,

    #[error("Field 'ubicacion' must not be empty")]
    Empty,

    #[error("Location '{location}' contains no letters or digits")]
    NoKeyCharacters { location: String },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
