// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::panic;
use std::sync::Arc;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reports panics (including ones inside request handlers) as structured
/// error events. With `propagate` the previously installed hook still runs.
pub fn set_hook_trace_panics(propagate: bool) {
    let prev_hook = propagate.then(|| Arc::new(panic::take_hook()));

    panic::set_hook(Box::new(move |info| {
        if let Some(prev_hook) = prev_hook.as_ref() {
            prev_hook(info);
        }

        let payload = info.payload();
        let panic_msg = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("Unknown panic payload");

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));

        tracing::error!(
            panic_msg,
            panic_location = location.as_deref().unwrap_or("unknown"),
            thread = std::thread::current().name().unwrap_or("<unnamed>"),
            "Unhandled panic caught"
        );
    }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
