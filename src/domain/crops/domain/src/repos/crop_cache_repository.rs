// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use internal_error::InternalError;

use crate::{CacheDocument, CacheEntry, CacheLookup, NormalizedKey};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Document store of resolved crops keyed by [`NormalizedKey`]
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait CropCacheRepository: Send + Sync {
    /// Returns `None` when no document exists under the key.
    /// A document that cannot be interpreted is reported as
    /// [`CacheLookup::Malformed`] rather than an error.
    async fn get(&self, key: &NormalizedKey) -> Result<Option<CacheLookup>, InternalError>;

    /// Creates or fully replaces the document under `entry.key`
    async fn put(&self, entry: &CacheEntry) -> Result<(), InternalError>;

    /// Stores an arbitrary document as-is, bypassing entry serialization
    async fn put_document(
        &self,
        key: &NormalizedKey,
        document: CacheDocument,
    ) -> Result<(), InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
