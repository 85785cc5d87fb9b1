// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image enhancer: chains decode, brightness/contrast, sharpen, and encode for
// a single consultation image.

use medlens_core::error::{MedlensError, Result};
use medlens_core::{EnhanceSettings, Enhancement, OutputFormat};
use tracing::{debug, info, instrument};

use crate::buffer::PixelBuffer;
use crate::codec;
use crate::enhance::{Parallelism, adjust_brightness_contrast_with, sharpen_with};

/// Enhancement pipeline operating on a single in-memory image.
///
/// Each transform consumes `self` and returns a new `ImageEnhancer` wrapping a
/// freshly allocated buffer, enabling method chaining.
///
/// ```ignore
/// let jpeg = ImageEnhancer::open("rash.jpg")?
///     .adjust(20, 1.2)?
///     .sharpen()?
///     .to_jpeg_bytes(0.8)?;
/// ```
pub struct ImageEnhancer {
    buffer: PixelBuffer,
    parallelism: Parallelism,
}

impl ImageEnhancer {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let buffer = codec::decode_file(path)?;
        info!(
            width = buffer.width(),
            height = buffer.height(),
            "Image loaded"
        );
        Ok(Self::from_buffer(buffer))
    }

    /// Create an enhancer from raw encoded bytes (JPEG, PNG, etc.).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::from_buffer(codec::decode(data)?))
    }

    /// Wrap an already-decoded buffer.
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            parallelism: Parallelism::default(),
        }
    }

    /// Override when transforms switch to row-parallel execution.
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Brightness offset plus contrast stretch around mid-grey.
    #[instrument(skip(self), fields(brightness, contrast))]
    pub fn adjust(self, brightness: i32, contrast: f64) -> Result<Self> {
        info!(brightness, contrast, "Adjusting brightness/contrast");
        let buffer =
            adjust_brightness_contrast_with(&self.buffer, brightness, contrast, self.parallelism)?;
        Ok(Self { buffer, ..self })
    }

    /// Brightness/contrast with the values from `settings`.
    pub fn enhance(self, settings: &EnhanceSettings) -> Result<Self> {
        self.adjust(settings.brightness, settings.contrast)
    }

    /// Apply the 3x3 sharpen kernel.
    #[instrument(skip(self))]
    pub fn sharpen(self) -> Result<Self> {
        info!("Sharpening image");
        let buffer = sharpen_with(&self.buffer, self.parallelism)?;
        Ok(Self { buffer, ..self })
    }

    /// Apply one of the UI enhancement modes.
    pub fn apply(self, enhancement: Enhancement, settings: &EnhanceSettings) -> Result<Self> {
        match enhancement {
            Enhancement::None => {
                debug!("No enhancement requested");
                Ok(self)
            }
            Enhancement::Brightness => self.enhance(settings),
            Enhancement::Sharpness => self.sharpen(),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        codec::encode(&self.buffer, OutputFormat::Png, 1.0)
    }

    /// Encode the current image as JPEG bytes with `quality` in 0.0–1.0.
    pub fn to_jpeg_bytes(&self, quality: f32) -> Result<Vec<u8>> {
        codec::encode(&self.buffer, OutputFormat::Jpeg, quality)
    }

    /// Encode as a JPEG `data:` URL.
    pub fn to_data_url(&self, quality: f32) -> Result<String> {
        codec::to_data_url(&self.buffer, OutputFormat::Jpeg, quality)
    }

    /// Write the image to a file. The format is inferred from the file
    /// extension, falling back to `default_format`.
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
        default_format: OutputFormat,
        quality: f32,
    ) -> Result<OutputFormat> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(OutputFormat::from_extension)
            .unwrap_or(default_format);
        self.save_as(path, format, quality)?;
        Ok(format)
    }

    /// Write the image to a file in `format`, whatever its extension.
    pub fn save_as(
        &self,
        path: impl AsRef<std::path::Path>,
        format: OutputFormat,
        quality: f32,
    ) -> Result<()> {
        let path = path.as_ref();
        let bytes = codec::encode(&self.buffer, format, quality)?;
        std::fs::write(path, bytes).map_err(|err| {
            MedlensError::ImageError(format!(
                "failed to save image to {}: {}",
                path.display(),
                err
            ))
        })?;
        info!(path = %path.display(), ?format, "Image saved");
        Ok(())
    }
}
