// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// YellowCert certificate detection CLI
#[derive(Parser, Debug)]
#[command(name = "yellowcert")]
#[command(version)]
#[command(about = "Detect vaccination certificate elements via the YellowCert service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a certificate image and annotate the detections
    Detect(commands::DetectArgs),

    /// Check that the detection service is reachable
    Health(commands::HealthArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Detect(args) => commands::detect(args).await,
        Commands::Health(args) => commands::health(args).await,
    }
}
