// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use clap::Parser;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = cultivos_server::Cli::parse();

    match cultivos_server::run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, error_msg = %err, "Server failed");
            eprintln!("Error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
