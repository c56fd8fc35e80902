//! Sources of card ranks for dealing.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;

/// A source of card ranks.
///
/// Drawing always succeeds; implementations decide what sequence comes out.
/// Tables are generic over their shoe so tests can script exact deals.
pub trait Shoe {
    /// Draws the next rank.
    fn draw(&mut self) -> Rank;
}

/// An infinite shoe: independent, uniformly distributed draws over the 13
/// ranks, with replacement.
///
/// Dealt cards are never removed from the drawable set, so the shoe cannot
/// exhaust and no card counting is meaningful against it. This diverges from
/// a finite deck on purpose.
#[derive(Debug, Clone)]
pub struct InfiniteShoe {
    rng: ChaCha8Rng,
}

impl InfiniteShoe {
    /// Creates a shoe from a seed, so deals are reproducible.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shoe for InfiniteShoe {
    fn draw(&mut self) -> Rank {
        let index = self.rng.random_range(0..Rank::ALL.len());
        Rank::ALL[index]
    }
}
