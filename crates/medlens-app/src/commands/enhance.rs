// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `medlens enhance`: decode, transform, re-encode.

use std::io::Write;
use std::path::Path;

use medlens_core::AppConfig;
use medlens_core::error::Result;
use medlens_imaging::{ImageEnhancer, Parallelism};
use tracing::info;

use crate::cli::EnhanceArgs;

pub fn run(config_path: &Path, args: EnhanceArgs, out: &mut dyn Write) -> Result<()> {
    let config = effective_config(AppConfig::load_or_default(config_path), &args)?;

    let enhancer = ImageEnhancer::open(&args.input)?
        .with_parallelism(Parallelism::with_threshold(config.parallel_threshold))
        .apply(args.mode, &config.enhance)?;

    let format = match args.format {
        Some(format) => {
            enhancer.save_as(&args.output, format, config.output_quality)?;
            format
        }
        None => enhancer.save(&args.output, config.output_format, config.output_quality)?,
    };

    info!(mode = %args.mode, "Enhancement written");
    writeln!(
        out,
        "wrote {} ({:?}, {}x{}, enhancement: {})",
        args.output.display(),
        format,
        enhancer.width(),
        enhancer.height(),
        args.mode
    )?;
    Ok(())
}

/// Layer command-line overrides on top of the persisted config.
fn effective_config(mut config: AppConfig, args: &EnhanceArgs) -> Result<AppConfig> {
    if let Some(brightness) = args.brightness {
        config.enhance.brightness = brightness;
    }
    if let Some(contrast) = args.contrast {
        config.enhance.contrast = contrast;
    }
    if let Some(quality) = args.quality {
        config.output_quality = quality;
    }
    config.validate()?;
    Ok(config)
}
