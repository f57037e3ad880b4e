// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Cache key derived from a free-form location string.
///
/// Contains only lowercase ASCII letters, digits and single [`Self::SEPARATOR`]
/// characters between non-empty runs of them. Can only be obtained through
/// [`NormalizedKey::try_normalize`], so an empty key is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub const SEPARATOR: char = '_';

    /// Lowercases the input and replaces every maximal run of characters
    /// outside `[a-z0-9]` with a single separator, then strips separators at
    /// both ends. Returns `None` when nothing is left.
    pub fn try_normalize(raw: &str) -> Option<Self> {
        let mut key = String::with_capacity(raw.len());
        let mut pending_separator = false;

        for c in raw.chars().flat_map(char::to_lowercase) {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending_separator && !key.is_empty() {
                    key.push(Self::SEPARATOR);
                }
                pending_separator = false;
                key.push(c);
            } else {
                pending_separator = true;
            }
        }

        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn normalize(raw: &str) -> Option<NormalizedKey> {
    NormalizedKey::try_normalize(raw)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
