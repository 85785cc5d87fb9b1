// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RGBA8 pixel buffer with a length invariant checked at construction.

use medlens_core::error::{MedlensError, Result};

/// Samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Row-major RGBA8 image, origin top-left.
///
/// `data.len() == width * height * 4` always holds; every constructor checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// Wrap raw RGBA samples, rejecting lengths that don't match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if data.len() % CHANNELS != 0 {
            return Err(MedlensError::InvalidBuffer(format!(
                "length {} is not a multiple of {CHANNELS}",
                data.len()
            )));
        }
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(MedlensError::InvalidBuffer(format!(
                "length {} does not match {width}x{height}x{CHANNELS} = {expected}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = expected_len(width, height)?;
        let mut data = try_alloc(len)?;
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Result<Self> {
        let mut data = try_alloc(expected_len(width, height)?)?;
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + CHANNELS]);
        Some(px)
    }

    /// Copy into freshly allocated storage, reporting allocation failure.
    pub fn try_clone(&self) -> Result<Self> {
        let mut data = try_alloc(self.data.len())?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            data,
            width: self.width,
            height: self.height,
        })
    }
}

/// `width * height * 4`, or an error if it overflows `usize`.
fn expected_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            MedlensError::InvalidBuffer(format!("{width}x{height} image is too large to address"))
        })
}

/// Empty vector with exactly `len` bytes of capacity.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MedlensError::Allocation { bytes: len })?;
    Ok(data)
}
