// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MedlensError, Result};
use crate::types::OutputFormat;

/// Default brightness offset added to every colour channel.
pub const DEFAULT_BRIGHTNESS: i32 = 20;
/// Default contrast multiplier applied around mid-grey (128).
pub const DEFAULT_CONTRAST: f64 = 1.2;
/// Default encoder quality on the 0.0–1.0 scale.
pub const DEFAULT_QUALITY: f32 = 0.8;
/// Pixel count at which transforms switch to row-parallel execution.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 30_000;

/// Parameters for the brightness/contrast enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceSettings {
    /// Signed offset added after the contrast stretch.
    pub brightness: i32,
    /// Multiplier applied to each channel's distance from 128.
    pub contrast: f64,
}

impl Default for EnhanceSettings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Brightness/contrast parameters used by the "brightness" enhancement.
    pub enhance: EnhanceSettings,
    /// Quality handed to the encoder (0.0–1.0). Ignored for PNG.
    pub output_quality: f32,
    /// Format used when the output path has no recognised extension.
    pub output_format: OutputFormat,
    /// Images with at least this many pixels are processed row-parallel.
    pub parallel_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enhance: EnhanceSettings::default(),
            output_quality: DEFAULT_QUALITY,
            output_format: OutputFormat::Jpeg,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.as_ref().display(), "Config loaded");
        Ok(config)
    }

    /// Read the config file, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file; using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Ignoring unusable config file");
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the encoder or transforms cannot use.
    ///
    /// Only `output_quality` is range-checked. Any finite contrast is
    /// accepted: the result is clamped per channel, a negative contrast
    /// inverts around mid-grey and 0 flattens the image to grey. Every
    /// `parallel_threshold` is meaningful, with 0 meaning always parallel and
    /// `usize::MAX` meaning never.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.output_quality) {
            return Err(MedlensError::Config(format!(
                "output_quality must be within 0.0..=1.0, got {}",
                self.output_quality
            )));
        }
        if !self.enhance.contrast.is_finite() {
            return Err(MedlensError::Config("contrast must be a finite number".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_enhancement_reference() {
        let config = AppConfig::default();
        assert_eq!(config.enhance.brightness, 20);
        assert!((config.enhance.contrast - 1.2).abs() < f64::EPSILON);
        assert!((config.output_quality - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.output_format, OutputFormat::Jpeg);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.enhance.brightness = -15;
        config.output_format = OutputFormat::Png;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "enhance": { "contrast": 2.0 } }"#).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.enhance.brightness, DEFAULT_BRIGHTNESS);
        assert!((loaded.enhance.contrast - 2.0).abs() < f64::EPSILON);
        assert_eq!(loaded.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load(&path).is_err());
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn extreme_contrast_and_threshold_are_accepted() {
        for contrast in [-3.0, 0.0, 1_000.0] {
            for parallel_threshold in [0, usize::MAX] {
                let config = AppConfig {
                    enhance: EnhanceSettings {
                        brightness: -255,
                        contrast,
                    },
                    parallel_threshold,
                    ..AppConfig::default()
                };
                assert!(config.validate().is_ok(), "{contrast} {parallel_threshold}");
            }
        }

        let mut config = AppConfig::default();
        config.enhance.contrast = f64::INFINITY;
        assert!(matches!(config.validate(), Err(MedlensError::Config(_))));
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let config = AppConfig {
            output_quality: 1.5,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(MedlensError::Config(_))));
    }
}
