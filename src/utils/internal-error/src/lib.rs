// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opaque error for failures the caller is not expected to handle beyond
/// reporting them (I/O, decoding, unexpected upstream state, etc.)
#[derive(Error, Debug)]
#[error("Internal error")]
pub struct InternalError {
    #[source]
    source: BoxedError,
    context: Option<String>,
}

impl InternalError {
    pub fn new<E: Into<BoxedError>>(e: E) -> Self {
        Self {
            source: e.into(),
            context: None,
        }
    }

    pub fn bail<T>(reason: impl Into<String>) -> Result<T, Self> {
        Err(Self::new(InternalErrorBail::new(reason)))
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Human-readable description including the wrapped cause
    pub fn reason(&self) -> String {
        match &self.context {
            Some(context) => format!("{self}: {} (context: {context})", self.source),
            None => format!("{self}: {}", self.source),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("{reason}")]
struct InternalErrorBail {
    reason: String,
}

impl InternalErrorBail {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait ErrorIntoInternal {
    fn int_err(self) -> InternalError;
}

impl<E> ErrorIntoInternal for E
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> InternalError {
        InternalError::new(self)
    }
}

pub trait ResultIntoInternal<OK> {
    fn int_err(self) -> Result<OK, InternalError>;

    fn context_int_err(self, context: impl Into<String>) -> Result<OK, InternalError>;
}

impl<OK, E> ResultIntoInternal<OK> for Result<OK, E>
where
    E: Into<BoxedError>,
{
    fn int_err(self) -> Result<OK, InternalError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(e.int_err()),
        }
    }

    fn context_int_err(self, context: impl Into<String>) -> Result<OK, InternalError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(e.int_err().with_context(context)),
        }
    }
}
