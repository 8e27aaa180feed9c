//! Branch misprediction source.
//!
//! The hazard engine asks a [`MispredictOracle`] once per branch when
//! prediction is enabled. [`RandomOracle`] draws from an explicit
//! [`rand::Rng`] so runs are reproducible from a seed; tests substitute
//! scripted oracles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::constants::{BRANCH_DRAW_RANGE, BRANCH_PROBABILITY};

/// Decides whether a predicted branch turns out to be mispredicted.
pub trait MispredictOracle {
    /// Returns `true` when the branch under consideration is mispredicted.
    fn mispredicts(&mut self) -> bool;
}

impl<O: MispredictOracle + ?Sized> MispredictOracle for &mut O {
    fn mispredicts(&mut self) -> bool {
        (**self).mispredicts()
    }
}

impl<O: MispredictOracle + ?Sized> MispredictOracle for Box<O> {
    fn mispredicts(&mut self) -> bool {
        (**self).mispredicts()
    }
}

/// Weighted random oracle.
///
/// Draws uniformly from `1..=10` and reports a misprediction when the draw
/// exceeds [`BRANCH_PROBABILITY`], i.e. with probability 1/10.
#[derive(Debug, Clone)]
pub struct RandomOracle<R> {
    rng: R,
}

impl<R: Rng> RandomOracle<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOracle<StdRng> {
    /// Deterministic oracle for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Oracle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> MispredictOracle for RandomOracle<R> {
    fn mispredicts(&mut self) -> bool {
        self.rng.random_range(1..=BRANCH_DRAW_RANGE) > BRANCH_PROBABILITY
    }
}

/// Oracle that always returns the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOracle(pub bool);

impl MispredictOracle for FixedOracle {
    fn mispredicts(&mut self) -> bool {
        self.0
    }
}
