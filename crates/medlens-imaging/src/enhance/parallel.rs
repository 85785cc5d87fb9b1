// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Row dispatch that switches to rayon above a pixel-count threshold.

use medlens_core::config::DEFAULT_PARALLEL_THRESHOLD;
use rayon::prelude::*;

use crate::buffer::CHANNELS;

/// When a transform fans its rows out across the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelism {
    /// Minimum pixel count for parallel execution.
    pub threshold: usize,
}

impl Parallelism {
    /// Never parallelise.
    pub const SEQUENTIAL: Self = Self {
        threshold: usize::MAX,
    };

    /// Parallelise every non-empty image.
    pub const ALWAYS: Self = Self { threshold: 0 };

    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }

    fn is_parallel(&self, pixel_count: usize) -> bool {
        pixel_count >= self.threshold
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Apply `f(y, row)` to each row of `data`.
///
/// Both branches call the same closure, so results don't depend on which one
/// runs. A zero `row_stride` (zero-width image) has no rows.
pub(crate) fn for_each_row_mut<F>(data: &mut [u8], row_stride: usize, parallelism: Parallelism, f: F)
where
    F: Fn(usize, &mut [u8]) + Sync,
{
    if row_stride == 0 {
        return;
    }
    let pixel_count = data.len() / CHANNELS;

    if parallelism.is_parallel(pixel_count) {
        data.par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        for (y, row) in data.chunks_exact_mut(row_stride).enumerate() {
            f(y, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_every_row_once_in_both_modes() {
        for mode in [Parallelism::SEQUENTIAL, Parallelism::ALWAYS] {
            let mut data = vec![0u8; 4 * 3 * 5];
            for_each_row_mut(&mut data, 12, mode, |y, row| {
                for b in row.iter_mut() {
                    *b += y as u8 + 1;
                }
            });
            for (y, row) in data.chunks_exact(12).enumerate() {
                assert!(row.iter().all(|&b| b == y as u8 + 1), "{mode:?} row {y}");
            }
        }
    }

    #[test]
    fn zero_stride_is_a_no_op() {
        let mut data: Vec<u8> = Vec::new();
        for_each_row_mut(&mut data, 0, Parallelism::ALWAYS, |_, _| panic!("no rows"));
    }

    #[test]
    fn default_threshold_comes_from_config() {
        assert_eq!(Parallelism::default().threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
