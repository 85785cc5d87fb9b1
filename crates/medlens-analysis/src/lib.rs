// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MedLens: Image analysis service abstractions.
//
// Callers hold an `InferenceService` trait object and own its model state
// explicitly: nothing is loaded until `load_model` is called. The only
// implementation shipped here is a mock that produces plausible but random
// findings; its randomness comes from an injected `EntropySource`.

pub mod entropy;
pub mod mock;
pub mod traits;

pub use entropy::{EntropySource, SequenceEntropy, UuidEntropy};
pub use mock::MockAnalyzer;
pub use traits::InferenceService;

/// The analysis service used by the application.
///
/// Returns an uninitialised service; call `load_model` before `analyze`.
pub fn default_service() -> Box<dyn InferenceService> {
    Box::new(MockAnalyzer::new(UuidEntropy))
}
