// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::time::Duration;

use cultivos_server::shutdown_signal;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(unix)]
#[test_log::test(tokio::test)]
async fn test_terminate_signal_triggers_shutdown() {
    let shutdown = shutdown_signal().unwrap();

    // SAFETY: the handler above is registered, so the signal is delivered to it
    // instead of terminating the test process
    let rc = unsafe { libc::raise(libc::SIGTERM) };
    assert_eq!(rc, 0);

    tokio::time::timeout(Duration::from_secs(5), shutdown)
        .await
        .expect("Shutdown did not resolve on SIGTERM");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
