// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for MedLens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a captured consultation image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enhancement applied to a captured image before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enhancement {
    /// Show the image as captured.
    #[default]
    None,
    /// Brightness offset plus contrast stretch around mid-grey.
    Brightness,
    /// 3x3 sharpening convolution.
    Sharpness,
}

impl std::str::FromStr for Enhancement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "original" => Ok(Self::None),
            "brightness" | "brighten" => Ok(Self::Brightness),
            "sharpness" | "sharpen" => Ok(Self::Sharpness),
            other => Err(format!(
                "unknown enhancement '{other}' (expected none, brightness, or sharpness)"
            )),
        }
    }
}

impl std::fmt::Display for Enhancement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Brightness => "brightness",
            Self::Sharpness => "sharpness",
        };
        f.write_str(name)
    }
}

/// Encoded output formats supported by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// MIME type used in data URLs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim())
            .ok_or_else(|| format!("unknown output format '{s}' (expected jpeg or png)"))
    }
}

/// Priority attached to an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One condition reported by an inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedCondition {
    pub name: String,
    /// Per-condition confidence in [0, 1].
    pub confidence: f64,
    pub description: String,
    /// Whether a clinician should look at this finding.
    pub requires_attention: bool,
}

/// Result of analysing one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    /// Overall confidence in [0, 1].
    pub confidence: f64,
    pub detected_conditions: Vec<DetectedCondition>,
    pub recommendations: Vec<String>,
    pub severity: Severity,
    pub analyzed_at: DateTime<Utc>,
}

/// Initialisation state of an inference model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    #[default]
    Uninitialized,
    Ready,
}

/// A captured or uploaded consultation image and what was done to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedImage {
    pub id: ImageId,
    pub captured_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    pub enhancement: Enhancement,
    pub analysis: Option<ImageAnalysis>,
}

impl CapturedImage {
    /// Record a freshly captured image with no enhancement or analysis.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: ImageId::new(),
            captured_at: Utc::now(),
            width,
            height,
            enhancement: Enhancement::None,
            analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enhancement_parses_ui_aliases() {
        assert_eq!("Brighten".parse::<Enhancement>().unwrap(), Enhancement::Brightness);
        assert_eq!("sharpen".parse::<Enhancement>().unwrap(), Enhancement::Sharpness);
        assert_eq!("original".parse::<Enhancement>().unwrap(), Enhancement::None);
        assert!("blur".parse::<Enhancement>().is_err());
    }

    #[test]
    fn output_format_from_extension() {
        assert_eq!(OutputFormat::from_extension("JPG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension("gif"), None);
    }

    #[test]
    fn analysis_serializes_camel_case() {
        let analysis = ImageAnalysis {
            confidence: 0.9,
            detected_conditions: vec![DetectedCondition {
                name: "Dry Skin".into(),
                confidence: 0.35,
                description: "Dehydrated skin appearance".into(),
                requires_attention: false,
            }],
            recommendations: vec![],
            severity: Severity::Low,
            analyzed_at: Utc::now(),
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("detectedConditions").is_some());
        assert_eq!(json["severity"], "low");
        assert_eq!(json["detectedConditions"][0]["requiresAttention"], false);
    }

    #[test]
    fn severity_orders_by_priority() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
