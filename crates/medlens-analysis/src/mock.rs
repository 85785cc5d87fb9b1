// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mock analyzer for demos and tests. It ignores pixel content and picks
// findings from a fixed catalogue using its entropy source.

use chrono::Utc;
use medlens_core::error::{MedlensError, Result};
use medlens_core::{DetectedCondition, ImageAnalysis, ModelState, Severity};
use medlens_imaging::PixelBuffer;
use tracing::{debug, info, instrument};

use crate::entropy::EntropySource;
use crate::traits::InferenceService;

/// A draw above this keeps the catalogue entry.
const KEEP_THRESHOLD: f64 = 0.6;
/// At most this many findings per analysis.
const MAX_FINDINGS: usize = 2;
/// Overall confidence lies in `[MIN_CONFIDENCE, MIN_CONFIDENCE + CONFIDENCE_SPAN)`.
const MIN_CONFIDENCE: f64 = 0.7;
const CONFIDENCE_SPAN: f64 = 0.3;

struct CatalogueEntry {
    name: &'static str,
    confidence: f64,
    description: &'static str,
    requires_attention: bool,
}

static CATALOGUE: [CatalogueEntry; 4] = [
    CatalogueEntry {
        name: "Normal Skin",
        confidence: 0.75,
        description: "Healthy skin appearance",
        requires_attention: false,
    },
    CatalogueEntry {
        name: "Mild Inflammation",
        confidence: 0.65,
        description: "Slight redness detected",
        requires_attention: true,
    },
    CatalogueEntry {
        name: "Possible Rash",
        confidence: 0.45,
        description: "Skin irregularity detected",
        requires_attention: true,
    },
    CatalogueEntry {
        name: "Dry Skin",
        confidence: 0.35,
        description: "Dehydrated skin appearance",
        requires_attention: false,
    },
];

const RECOMMENDATIONS: [&str; 4] = [
    "Consult with a dermatologist for proper diagnosis",
    "Keep the area clean and dry",
    "Avoid scratching or irritating the area",
    "Monitor for any changes in appearance",
];

/// Inference service that fabricates findings.
pub struct MockAnalyzer<E> {
    entropy: E,
    state: ModelState,
}

impl<E: EntropySource> MockAnalyzer<E> {
    /// An uninitialised analyzer drawing from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            state: ModelState::Uninitialized,
        }
    }

    fn generate(&mut self) -> ImageAnalysis {
        // Draw for every entry before truncating so each analysis consumes
        // the same number of draws.
        let kept: Vec<&CatalogueEntry> = CATALOGUE
            .iter()
            .filter(|_| self.entropy.next_unit() > KEEP_THRESHOLD)
            .collect();

        let detected_conditions: Vec<DetectedCondition> = kept
            .into_iter()
            .take(MAX_FINDINGS)
            .map(|entry| DetectedCondition {
                name: entry.name.to_string(),
                confidence: entry.confidence,
                description: entry.description.to_string(),
                requires_attention: entry.requires_attention,
            })
            .collect();

        let severity = if detected_conditions.iter().any(|c| c.requires_attention) {
            Severity::Medium
        } else {
            Severity::Low
        };

        ImageAnalysis {
            confidence: MIN_CONFIDENCE + self.entropy.next_unit() * CONFIDENCE_SPAN,
            detected_conditions,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
            severity,
            analyzed_at: Utc::now(),
        }
    }
}

impl<E: EntropySource> InferenceService for MockAnalyzer<E> {
    fn name(&self) -> &str {
        "mock"
    }

    fn state(&self) -> ModelState {
        self.state
    }

    fn load_model(&mut self) -> Result<ModelState> {
        if self.state == ModelState::Uninitialized {
            self.state = ModelState::Ready;
            info!("Mock analysis model loaded");
        }
        Ok(self.state)
    }

    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    fn analyze(&mut self, image: &PixelBuffer) -> Result<ImageAnalysis> {
        if self.state != ModelState::Ready {
            return Err(MedlensError::ModelNotLoaded);
        }
        if image.is_empty() {
            return Err(MedlensError::Analysis("image has no pixels".into()));
        }

        let analysis = self.generate();
        debug!(
            findings = analysis.detected_conditions.len(),
            severity = ?analysis.severity,
            confidence = analysis.confidence,
            "Mock analysis generated"
        );
        Ok(analysis)
    }
}
