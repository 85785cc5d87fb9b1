// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface for MedLens: argument definitions and command dispatch.

pub mod cli;
pub mod commands;
pub mod data_dir;

use std::io::Write;

use medlens_core::error::Result;

pub use cli::{Cli, Commands, ConfigAction};

/// Run one parsed command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(data_dir::config_path);

    match cli.command {
        Commands::Enhance(args) => commands::enhance::run(&config_path, args, out),
        Commands::Analyze(args) => commands::analyze::run(&config_path, args, out),
        Commands::Config { action } => commands::config::run(&config_path, action, out),
    }
}
