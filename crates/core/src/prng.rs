//! Seedable Xorshift64 generator for jittered sampling and shuffling.
//!
//! Callers own the generator and pass it where randomness is needed, so
//! results are reproducible from a seed and there is no process-wide state.

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is replaced by a fixed non-zero fallback, since zero is a
/// fixed point of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a generator from `seed`. Equal seeds yield equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns it. Never returns 0 for a non-zero
    /// state, so the sequence cannot collapse.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index in [0, bound). Returns 0 when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }

    /// Fisher–Yates shuffle in place, walking from the back of the slice.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..=items.len()).rev() {
            let j = self.next_index(i);
            items.swap(j, i - 1);
        }
    }
}
