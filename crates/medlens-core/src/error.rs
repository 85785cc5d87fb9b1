// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for MedLens.

use thiserror::Error;

/// Top-level error type for all MedLens operations.
#[derive(Debug, Error)]
pub enum MedlensError {
    // -- Pixel buffer errors --
    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("could not allocate {bytes} bytes for the output buffer")]
    Allocation { bytes: usize },

    // -- Codec errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Analysis errors --
    #[error("analysis model has not been loaded")]
    ModelNotLoaded,

    #[error("image analysis failed: {0}")]
    Analysis(String),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MedlensError>;
