// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Crop suggested for a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl CropRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Accepts only objects whose `nombre` and `descripcion` are strings
    /// that stay non-empty after trimming. Extra fields are ignored.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;

        let name = object.get("nombre")?.as_str()?;
        let description = object.get("descripcion")?.as_str()?;

        if name.trim().is_empty() || description.trim().is_empty() {
            return None;
        }

        Some(Self::new(name, description))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
