//! Random slice sources.
//!
//! The engine never touches a global RNG; every draw goes through a
//! `SliceSource` so hosts and tests can inject deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces one slice index per spin.
pub trait SliceSource {
    /// Draws an index in `[0, slice_count)`. `slice_count` is never zero.
    fn draw(&mut self, slice_count: usize) -> usize;
}

impl<S: SliceSource + ?Sized> SliceSource for &mut S {
    fn draw(&mut self, slice_count: usize) -> usize {
        (**self).draw(slice_count)
    }
}

impl<S: SliceSource + ?Sized> SliceSource for Box<S> {
    fn draw(&mut self, slice_count: usize) -> usize {
        (**self).draw(slice_count)
    }
}

/// Uniform draws from `StdRng`.
#[derive(Debug, Clone)]
pub struct RngSliceSource {
    rng: StdRng,
}

impl RngSliceSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SliceSource for RngSliceSource {
    fn draw(&mut self, slice_count: usize) -> usize {
        self.rng.gen_range(0..slice_count)
    }
}

/// Replays a fixed index sequence, cycling when exhausted.
///
/// Indices are returned as-is; the engine rejects out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSliceSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedSliceSource {
    pub fn always(index: usize) -> Self {
        Self::cycle(vec![index])
    }

    /// Cycles through `indices`; an empty list always yields `0`.
    pub fn cycle(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl SliceSource for FixedSliceSource {
    fn draw(&mut self, _slice_count: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor = self.cursor.wrapping_add(1);
        index
    }
}
