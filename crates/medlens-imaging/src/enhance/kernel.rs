// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 integer convolution and the sharpen filter built on it.

use medlens_core::error::Result;
use tracing::{debug, instrument};

use super::parallel::{Parallelism, for_each_row_mut};
use crate::buffer::{CHANNELS, PixelBuffer, try_alloc};

/// A 3x3 matrix of signed integer weights, indexed `[row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    weights: [[i32; 3]; 3],
}

impl Kernel {
    /// Centre 5, orthogonal neighbours -1, corners 0.
    pub const SHARPEN: Self = Self::new([[0, -1, 0], [-1, 5, -1], [0, -1, 0]]);

    pub const IDENTITY: Self = Self::new([[0, 0, 0], [0, 1, 0], [0, 0, 0]]);

    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[[i32; 3]; 3] {
        &self.weights
    }

    /// Sum of all weights. A sum of 1 preserves flat regions.
    pub fn sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }
}

/// Sharpen with the fixed [`Kernel::SHARPEN`].
pub fn sharpen(input: &PixelBuffer) -> Result<PixelBuffer> {
    sharpen_with(input, Parallelism::default())
}

pub fn sharpen_with(input: &PixelBuffer, parallelism: Parallelism) -> Result<PixelBuffer> {
    convolve3x3_with(input, &Kernel::SHARPEN, parallelism)
}

pub fn convolve3x3(input: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer> {
    convolve3x3_with(input, kernel, Parallelism::default())
}

/// Convolve the colour channels of every interior pixel with `kernel`.
///
/// Border rows and columns, and the alpha channel everywhere, are copied from
/// the input unchanged. Sums are accumulated in `i32` and clamped to 0..=255
/// only when stored. Neighbourhoods are always read from `input`, never from
/// already-written output. Images narrower or shorter than 3 pixels come back
/// as an exact copy.
#[instrument(skip(input, kernel), fields(width = input.width(), height = input.height()))]
pub fn convolve3x3_with(
    input: &PixelBuffer,
    kernel: &Kernel,
    parallelism: Parallelism,
) -> Result<PixelBuffer> {
    let width = input.width() as usize;
    let height = input.height() as usize;
    let src = input.as_bytes();

    let mut data = try_alloc(src.len())?;
    data.extend_from_slice(src);

    if width < 3 || height < 3 {
        debug!("No interior pixels; returning copy");
        return PixelBuffer::from_raw(input.width(), input.height(), data);
    }

    let stride = input.row_stride();
    let weights = kernel.weights;

    for_each_row_mut(&mut data, stride, parallelism, |y, row| {
        if y == 0 || y == height - 1 {
            return;
        }
        for x in 1..width - 1 {
            for c in 0..3 {
                let mut sum = 0i32;
                for (ky, kernel_row) in weights.iter().enumerate() {
                    let base = (y + ky - 1) * stride;
                    for (kx, &w) in kernel_row.iter().enumerate() {
                        sum += w * src[base + (x + kx - 1) * CHANNELS + c] as i32;
                    }
                }
                row[x * CHANNELS + c] = sum.clamp(0, 255) as u8;
            }
        }
    });

    debug!("Convolution complete");
    PixelBuffer::from_raw(input.width(), input.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grey 3x3 neighbourhood laid out row by row, alpha 255.
    fn grey3x3(values: [u8; 9]) -> PixelBuffer {
        PixelBuffer::from_fn(3, 3, |x, y| {
            let v = values[(y * 3 + x) as usize];
            [v, v, v, 255]
        })
        .unwrap()
    }

    #[test]
    fn sharpen_kernel_weights_sum_to_one() {
        assert_eq!(Kernel::SHARPEN.sum(), 1);
        assert_eq!(Kernel::SHARPEN.weights()[1][1], 5);
        assert_eq!(Kernel::SHARPEN.weights()[0][0], 0);
    }

    #[test]
    fn hand_computed_centre() {
        //  90  10  90
        //  30  50  40
        //  90  20  90
        // 5*50 - (10 + 30 + 40 + 20) = 150; corners have zero weight.
        let out = sharpen(&grey3x3([90, 10, 90, 30, 50, 40, 90, 20, 90])).unwrap();
        assert_eq!(out.pixel(1, 1), Some([150, 150, 150, 255]));
    }

    #[test]
    fn hand_computed_centre_clamps_both_ways() {
        // 5*200 - 4*10 = 960 -> 255
        let high = sharpen(&grey3x3([0, 10, 0, 10, 200, 10, 0, 10, 0])).unwrap();
        assert_eq!(high.pixel(1, 1), Some([255, 255, 255, 255]));

        // 5*10 - 4*50 = -150 -> 0
        let low = sharpen(&grey3x3([0, 50, 0, 50, 10, 50, 0, 50, 0])).unwrap();
        assert_eq!(low.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn channels_are_convolved_independently() {
        let img = PixelBuffer::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                [100, 0, 60, 77]
            } else {
                [20, 0, 60, 255]
            }
        })
        .unwrap();
        let out = sharpen(&img).unwrap();
        // R: 500 - 80 = 420 -> 255; G: 0; B: 300 - 240 = 60; alpha kept.
        assert_eq!(out.pixel(1, 1), Some([255, 0, 60, 77]));
    }

    #[test]
    fn uniform_image_is_unchanged() {
        let img = PixelBuffer::filled(9, 7, [37, 142, 250, 128]).unwrap();
        assert_eq!(sharpen(&img).unwrap(), img);
    }

    #[test]
    fn borders_pass_through() {
        let img = PixelBuffer::from_fn(6, 5, |x, y| [(x * 40) as u8, (y * 50) as u8, ((x + y) * 20) as u8, 255])
            .unwrap();
        let out = sharpen(&img).unwrap();
        for y in 0..5 {
            for x in 0..6 {
                if x == 0 || y == 0 || x == 5 || y == 4 {
                    assert_eq!(out.pixel(x, y), img.pixel(x, y), "border ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn thin_images_are_returned_unchanged() {
        for (w, h) in [(1, 1), (1, 9), (9, 1), (2, 2), (2, 5), (0, 0)] {
            let img = PixelBuffer::from_fn(w, h, |x, y| [(x * 17) as u8, (y * 29) as u8, 200, 100]).unwrap();
            assert_eq!(sharpen(&img).unwrap(), img, "{w}x{h}");
        }
    }

    #[test]
    fn reads_from_input_not_output() {
        // Two adjacent interior pixels: if the left result leaked into the
        // right neighbourhood, the right value would differ.
        let img = PixelBuffer::from_fn(4, 3, |x, y| {
            let v = match (x, y) {
                (1, 1) => 100,
                (2, 1) => 60,
                _ => 40,
            };
            [v, v, v, 255]
        })
        .unwrap();
        let out = sharpen(&img).unwrap();
        // left: 500 - (40 + 40 + 40 + 60) = 320 -> 255
        // right: 300 - (40 + 40 + 100 + 40) = 80
        assert_eq!(out.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(out.pixel(2, 1), Some([80, 80, 80, 255]));
    }

    #[test]
    fn identity_kernel_copies() {
        let img = PixelBuffer::from_fn(5, 5, |x, y| [(x * y) as u8, x as u8, y as u8, 1]).unwrap();
        assert_eq!(convolve3x3(&img, &Kernel::IDENTITY).unwrap(), img);
    }
}
