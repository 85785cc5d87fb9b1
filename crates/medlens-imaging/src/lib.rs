// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// medlens-imaging: Image enhancement for consultation photos.
//
// Provides a validated RGBA pixel buffer, the brightness/contrast and 3x3
// sharpen transforms, encode/decode through the `image` crate, and a chaining
// `ImageEnhancer` that ties them together.

pub mod buffer;
pub mod codec;
pub mod enhance;
pub mod processor;

pub use buffer::PixelBuffer;
pub use codec::{decode, decode_file, encode, to_data_url};
pub use enhance::{Kernel, Parallelism, adjust_brightness_contrast, convolve3x3, enhance, sharpen};
pub use processor::ImageEnhancer;
