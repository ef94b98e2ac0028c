//! Uniform random selection from content pools.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::error;

use crate::error::AppError;

/// Picks items uniformly, with replacement. Seed it for reproducible tests.
pub struct Picker {
    rng: StdRng,
}

impl Default for Picker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Picker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `None` only for an empty slice, which is logged as a bug.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let choice = items.choose(&mut self.rng);
        if choice.is_none() {
            error!("BUG: pick() called on an empty list");
        }
        choice
    }

    /// Like `pick`, but an empty pool becomes an internal error naming the pool.
    pub fn pick_required<'a, T>(&mut self, items: &'a [T], pool: &str) -> Result<&'a T, AppError> {
        self.pick(items)
            .ok_or_else(|| AppError::Internal(format!("empty content pool: {}", pool)))
    }
}
