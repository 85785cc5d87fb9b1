// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use medlens_core::{Enhancement, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "medlens")]
#[command(version, about = "Enhance and analyse consultation images", long_about = None)]
pub struct Cli {
    /// Config file (default: config.json in the MedLens data directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Brighten or sharpen an image and write the result
    Enhance(EnhanceArgs),

    /// Run image analysis and print the result as JSON
    Analyze(AnalyzeArgs),

    /// Inspect or reset the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
pub struct EnhanceArgs {
    /// Image to read (JPEG, PNG, ...)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the enhanced image
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Enhancement: none, brightness, or sharpness
    #[arg(short, long, value_name = "MODE", default_value = "brightness")]
    pub mode: Enhancement,

    /// Brightness offset (overrides config)
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast multiplier (overrides config)
    #[arg(long, value_name = "FLOAT")]
    pub contrast: Option<f64>,

    /// Encoder quality 0.0-1.0 (overrides config; JPEG only)
    #[arg(short, long, value_name = "FLOAT")]
    pub quality: Option<f32>,

    /// Output format: jpeg or png (default: from OUTPUT extension)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Image to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enhancement to apply before analysis
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub enhance: Enhancement,

    /// Replay fixed random draws (comma-separated, each in 0-1) for
    /// reproducible output
    #[arg(long, value_name = "F,F,...", value_delimiter = ',')]
    pub seed_sequence: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Print the config file location
    Path,
    /// Overwrite the config file with defaults
    Reset,
}
