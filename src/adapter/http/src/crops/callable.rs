// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use serde::{Deserialize, Serialize};
use serde_json::Value;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Successful reply of a callable function: `{ "result": ... }`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallableResponse<T> {
    pub result: T,
}

/// Callable clients wrap arguments as `{ "data": { ... } }`. Bodies without
/// the wrapper are taken as the arguments themselves.
pub fn unwrap_callable_payload(body: Value) -> Value {
    match body {
        Value::Object(mut fields) if fields.len() == 1 && fields.contains_key("data") => {
            fields.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
