//! Randomness for the carver, passed in explicitly by the caller
//!
//! The carver only ever asks for one thing: the four directions in a fresh
//! uniformly random order. Seeding the source makes a maze reproducible.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::spatial::Direction;

/// Source of random direction orderings
pub trait RandomSource {
    /// A uniformly random permutation of all four directions
    ///
    /// Every call must draw a new permutation; results are never cached.
    fn random_directions(&mut self) -> [Direction; 4];
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_directions(&mut self) -> [Direction; 4] {
        (**self).random_directions()
    }
}

/// `StdRng`-backed source for reproducible or entropy-seeded generation
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_directions(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        directions
    }
}
