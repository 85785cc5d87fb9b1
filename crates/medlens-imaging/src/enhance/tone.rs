// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Brightness/contrast adjustment.
//
//   out = clamp((in - 128) * contrast + 128 + brightness, 0, 255)
//
// applied to R, G and B; alpha is copied through. The clamped value is
// truncated toward zero when stored.

use medlens_core::EnhanceSettings;
use medlens_core::error::Result;
use tracing::{debug, instrument};

use super::parallel::{Parallelism, for_each_row_mut};
use crate::buffer::{CHANNELS, PixelBuffer, try_alloc};

/// Apply the default-parallelism brightness/contrast transform.
pub fn adjust_brightness_contrast(
    input: &PixelBuffer,
    brightness: i32,
    contrast: f64,
) -> Result<PixelBuffer> {
    adjust_brightness_contrast_with(input, brightness, contrast, Parallelism::default())
}

/// Apply brightness/contrast using the values from `settings`.
pub fn enhance(input: &PixelBuffer, settings: &EnhanceSettings) -> Result<PixelBuffer> {
    adjust_brightness_contrast(input, settings.brightness, settings.contrast)
}

/// Brightness/contrast with explicit control over row parallelism.
#[instrument(skip(input), fields(width = input.width(), height = input.height()))]
pub fn adjust_brightness_contrast_with(
    input: &PixelBuffer,
    brightness: i32,
    contrast: f64,
    parallelism: Parallelism,
) -> Result<PixelBuffer> {
    let lut = tone_lut(brightness, contrast);

    let mut data = try_alloc(input.as_bytes().len())?;
    data.extend_from_slice(input.as_bytes());

    for_each_row_mut(&mut data, input.row_stride(), parallelism, |_, row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            px[0] = lut[px[0] as usize];
            px[1] = lut[px[1] as usize];
            px[2] = lut[px[2] as usize];
        }
    });

    debug!(brightness, contrast, "Brightness/contrast applied");
    PixelBuffer::from_raw(input.width(), input.height(), data)
}

/// Precompute the channel mapping for every possible 8-bit input.
pub fn tone_lut(brightness: i32, contrast: f64) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let adjusted = (value as f64 - 128.0) * contrast + 128.0 + brightness as f64;
        // NaN survives `clamp` and then casts to 0.
        *slot = adjusted.clamp(0.0, 255.0) as u8;
    }
    lut
}
