// ABOUTME: Uniform random selection of distinct bucket entries
// ABOUTME: Entropy is injected so tests can replay a fixed sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Random Selection Policy
//!
//! `pick` draws up to `count` distinct entries from a bucket in uniformly
//! random order using a partial Fisher-Yates shuffle over indices. Each call
//! is independent: nothing is remembered between calls, so the same recipe
//! may come back for another slot or another day.
//!
//! Randomness comes from an [`EntropySource`]. Every `rand` generator is one,
//! so production code passes `rand::thread_rng()` (or a per-call `StdRng`)
//! and tests pass a seeded `ChaCha8Rng` or a [`SequenceEntropy`].

use rand::{Rng, RngCore};

/// Source of uniform floats in `[0, 1)`
pub trait EntropySource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> EntropySource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<f64>,
    position: usize,
}

impl SequenceEntropy {
    /// Create a source replaying `values`
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Source that always returns `0.0`, which keeps buckets in catalog order
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(Vec::new())
    }
}

impl EntropySource for SequenceEntropy {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = self.position.wrapping_add(1);
        if value.is_finite() {
            value.clamp(0.0, MAX_UNIT)
        } else {
            0.0
        }
    }
}

/// Largest f64 below 1.0
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

/// Map a unit value onto an index in `0..len`
///
/// `len` must be non-zero.
pub(crate) fn scaled_index(unit: f64, len: usize) -> usize {
    let index = (unit * len as f64).floor() as usize;
    index.min(len - 1)
}

/// Pick up to `count` distinct entries of `bucket` in uniformly random order
///
/// Returns every entry (shuffled) when the bucket is smaller than `count`,
/// and an empty vector when the bucket is empty or `count` is zero.
pub fn pick<'a, T, E>(bucket: &'a [T], count: usize, entropy: &mut E) -> Vec<&'a T>
where
    E: EntropySource + ?Sized,
{
    let take = count.min(bucket.len());
    let mut indices: Vec<usize> = (0..bucket.len()).collect();

    for i in 0..take {
        let j = i + scaled_index(entropy.next_unit(), bucket.len() - i);
        indices.swap(i, j);
    }

    indices[..take].iter().map(|&index| &bucket[index]).collect()
}

/// Pick a single entry, or `None` for an empty bucket
pub fn pick_one<'a, T, E>(bucket: &'a [T], entropy: &mut E) -> Option<&'a T>
where
    E: EntropySource + ?Sized,
{
    if bucket.is_empty() {
        None
    } else {
        Some(&bucket[scaled_index(entropy.next_unit(), bucket.len())])
    }
}
