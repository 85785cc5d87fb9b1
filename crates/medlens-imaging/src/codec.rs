// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Encode/decode between compressed image bytes and `PixelBuffer`, using the
// `image` crate. The enhancement transforms never see encoded data.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use medlens_core::OutputFormat;
use medlens_core::error::{MedlensError, Result};
use tracing::{debug, instrument};

use crate::buffer::{CHANNELS, PixelBuffer, try_alloc};

/// Decode JPEG, PNG, or any other format the `image` crate recognises into RGBA8.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)
        .map_err(|err| MedlensError::ImageError(format!("failed to decode image: {}", err)))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "Image decoded from bytes");
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Open and decode an image file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn decode_file(path: impl AsRef<std::path::Path>) -> Result<PixelBuffer> {
    let img = image::open(path.as_ref()).map_err(|err| match err {
        // Missing or unreadable files stay `Io`.
        image::ImageError::IoError(io) => MedlensError::Io(io),
        other => MedlensError::ImageError(format!(
            "failed to open {}: {}",
            path.as_ref().display(),
            other
        )),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Encode `buffer` as `format`.
///
/// `quality` is on the 0.0–1.0 scale and only affects JPEG, which also drops
/// the alpha channel.
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn encode(buffer: &PixelBuffer, format: OutputFormat, quality: f32) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let (width, height) = (buffer.width(), buffer.height());

    match format {
        OutputFormat::Jpeg => {
            let rgb = strip_alpha(buffer)?;
            JpegEncoder::new_with_quality(&mut out, jpeg_quality(quality))
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(|err| MedlensError::ImageError(format!("JPEG encoding failed: {}", err)))?;
        }
        OutputFormat::Png => {
            PngEncoder::new(&mut out)
                .write_image(buffer.as_bytes(), width, height, ExtendedColorType::Rgba8)
                .map_err(|err| MedlensError::ImageError(format!("PNG encoding failed: {}", err)))?;
        }
    }

    debug!(?format, bytes = out.len(), "Image encoded");
    Ok(out)
}

/// Encode and wrap as a `data:` URL suitable for an `<img src>`.
pub fn to_data_url(buffer: &PixelBuffer, format: OutputFormat, quality: f32) -> Result<String> {
    let bytes = encode(buffer, format, quality)?;
    Ok(format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes)))
}

/// Map 0.0–1.0 onto the JPEG encoder's 1–100 scale.
pub fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

fn strip_alpha(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut rgb = try_alloc(buffer.pixel_count() * 3)?;
    for px in buffer.as_bytes().chunks_exact(CHANNELS) {
        rgb.extend_from_slice(&px[..3]);
    }
    Ok(rgb)
}
