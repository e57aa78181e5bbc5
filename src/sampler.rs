//! Uniform random sampling for field generation.
//!
//! Generation never reaches for a global RNG; it pulls every random value
//! from a [`UniformSampler`] handed in by the caller. Any `rand` generator
//! works as-is:
//!
//! ```
//! use galaxy_field::sampler::UniformSampler;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! For tests and reproducible scenarios, [`SequenceSampler`] and
//! [`ConstantSampler`] replay fixed values.

use rand::{Rng, RngCore};

/// A source of uniform samples in `[0, 1)`.
pub trait UniformSampler {
    /// Next sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f32;
}

impl<R: RngCore + ?Sized> UniformSampler for R {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSampler {
    /// Create a sampler from a list of values.
    ///
    /// An empty list behaves like a constant `0.0`. Values are used as given;
    /// keeping them in `[0, 1)` is up to the caller.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSampler for SequenceSampler {
    fn next_uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Returns the same sample forever.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSampler(pub f32);

impl ConstantSampler {
    /// The largest `f32` below 1.0 that `rand` can produce.
    pub const MAX: ConstantSampler = ConstantSampler(1.0 - f32::EPSILON / 2.0);
}

impl UniformSampler for ConstantSampler {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        self.0
    }
}
