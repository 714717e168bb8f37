// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small random offsets that keep grid-placed graph nodes from lining up.

use core::fmt::Debug;

use kurbo::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Largest offset, in pixels, along either axis.
pub const MAX_JITTER: i32 = 10;

/// Source of per-node placement offsets.
pub trait Jitter: Debug {
    /// The offset for the next node.
    fn offset(&mut self) -> Vec2;
}

/// No offset at all; node positions are exactly grid-centered.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn offset(&mut self) -> Vec2 {
        Vec2::ZERO
    }
}

/// Whole-pixel offsets drawn uniformly from `[-MAX_JITTER, MAX_JITTER]`.
#[derive(Clone, Debug)]
pub struct RandomJitter {
    rng: SmallRng,
}

impl RandomJitter {
    /// Reproducible offsets from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Offsets seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_thread_rng() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RandomJitter {
    #[cfg(feature = "std")]
    fn default() -> Self {
        Self::from_thread_rng()
    }

    #[cfg(not(feature = "std"))]
    fn default() -> Self {
        Self::seeded(0x5eed)
    }
}

impl Jitter for RandomJitter {
    fn offset(&mut self) -> Vec2 {
        let x = self.rng.random_range(-MAX_JITTER..=MAX_JITTER);
        let y = self.rng.random_range(-MAX_JITTER..=MAX_JITTER);
        Vec2::new(f64::from(x), f64::from(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_in_range_and_are_whole() {
        let mut jitter = RandomJitter::seeded(7);
        for _ in 0..200 {
            let v = jitter.offset();
            for c in [v.x, v.y] {
                assert!(c.abs() <= 10.0, "offset {c} out of range");
                assert_eq!(c, c.trunc(), "offset {c} is fractional");
            }
        }
    }

    #[test]
    fn same_seed_same_offsets() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.offset(), b.offset());
        }
    }

    #[test]
    fn no_jitter_is_zero() {
        assert_eq!(NoJitter.offset(), Vec2::ZERO);
    }
}
