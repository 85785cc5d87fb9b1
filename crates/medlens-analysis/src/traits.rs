// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trait definition for image analysis backends.

use medlens_core::error::Result;
use medlens_core::{ImageAnalysis, ModelState};
use medlens_imaging::PixelBuffer;

/// A backend that turns a decoded image into an `ImageAnalysis`.
///
/// Implementations start out `Uninitialized`. `analyze` must return
/// `MedlensError::ModelNotLoaded` until `load_model` has succeeded; it never
/// loads the model implicitly.
pub trait InferenceService: Send {
    /// Human-readable backend name (e.g. "mock").
    fn name(&self) -> &str;

    /// Current initialisation state.
    fn state(&self) -> ModelState;

    /// Load the model. Calling it again once `Ready` is a no-op.
    fn load_model(&mut self) -> Result<ModelState>;

    /// Analyse one image.
    fn analyze(&mut self, image: &PixelBuffer) -> Result<ImageAnalysis>;
}
