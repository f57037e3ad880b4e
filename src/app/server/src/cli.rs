// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use std::net::IpAddr;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "cultivos-server", version, about = "Resolves crops common to a location")]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, value_name = "FILE", env = "CROPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on (overrides the config)
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// Port to listen on (overrides the config)
    #[arg(long)]
    pub port: Option<u16>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
