// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sources of uniform random draws for the mock analyzer.

use uuid::Uuid;

/// Yields draws in `[0, 1)`.
pub trait EntropySource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Mantissa-sized mask (53 bits) for building an `f64` in `[0, 1)`.
const MANTISSA_MASK: u64 = (1 << 53) - 1;

/// Draws from the random bits of a fresh v4 UUID.
///
/// Only the low 53 bits are used; the version and variant bits live in the
/// upper half.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidEntropy;

impl EntropySource for UuidEntropy {
    fn next_unit(&mut self) -> f64 {
        let bits = Uuid::new_v4().as_u128() as u64 & MANTISSA_MASK;
        bits as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty list always yields 0.0.
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<f64>,
    next: usize,
}

impl SequenceEntropy {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        Self { values, next: 0 }
    }
}

impl EntropySource for SequenceEntropy {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_draws_are_in_unit_interval() {
        let mut entropy = UuidEntropy;
        for _ in 0..1_000 {
            let v = entropy.next_unit();
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn sequence_wraps_around() {
        let mut entropy = SequenceEntropy::new(vec![0.1, 0.2]);
        let draws: Vec<f64> = (0..5).map(|_| entropy.next_unit()).collect();
        assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
    }

    #[test]
    fn sequence_clamps_out_of_range_values() {
        let mut entropy = SequenceEntropy::new(vec![-3.0, 7.0, f64::NAN]);
        assert_eq!(entropy.next_unit(), 0.0);
        assert!(entropy.next_unit() < 1.0);
        assert_eq!(entropy.next_unit(), 0.0);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut entropy = SequenceEntropy::new(Vec::<f64>::new());
        assert_eq!(entropy.next_unit(), 0.0);
    }
}
