// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement transforms: brightness/contrast and 3x3 convolution.
//
// Every transform reads its input buffer and writes a separately allocated
// output buffer; the input is never modified.

pub mod kernel;
pub mod parallel;
pub mod tone;

pub use kernel::{Kernel, convolve3x3, convolve3x3_with, sharpen, sharpen_with};
pub use parallel::Parallelism;
pub use tone::{adjust_brightness_contrast, adjust_brightness_contrast_with, enhance, tone_lut};
