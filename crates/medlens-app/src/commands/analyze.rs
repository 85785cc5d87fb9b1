// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `medlens analyze`: optional enhancement, then analysis, printed as a
// `CapturedImage` JSON record.

use std::io::Write;
use std::path::Path;

use medlens_analysis::{InferenceService, MockAnalyzer, SequenceEntropy, default_service};
use medlens_core::error::Result;
use medlens_core::{AppConfig, CapturedImage};
use medlens_imaging::{ImageEnhancer, Parallelism};

use crate::cli::AnalyzeArgs;

pub fn run(config_path: &Path, args: AnalyzeArgs, out: &mut dyn Write) -> Result<()> {
    let config = AppConfig::load_or_default(config_path);

    let enhancer = ImageEnhancer::open(&args.input)?
        .with_parallelism(Parallelism::with_threshold(config.parallel_threshold))
        .apply(args.enhance, &config.enhance)?;

    let mut service: Box<dyn InferenceService> = match args.seed_sequence {
        Some(draws) => Box::new(MockAnalyzer::new(SequenceEntropy::new(draws))),
        None => default_service(),
    };
    service.load_model()?;

    let mut record = CapturedImage::new(enhancer.width(), enhancer.height());
    record.enhancement = args.enhance;
    record.analysis = Some(service.analyze(enhancer.buffer())?);

    serde_json::to_writer_pretty(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}
