use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A simple randomness abstraction for deterministic selection in tests.
///
/// The engine only ever asks for "an index below `len`"; swapping the
/// sampler never touches transition logic.
#[derive(Debug, Clone, Default)]
pub enum Sampler {
    /// Draws from the thread-local generator.
    #[default]
    Default,
    /// Draws from a seeded generator, reproducible across runs.
    Seeded(StdRng),
}

impl Sampler {
    /// Returns a sampler backed by the thread-local generator.
    #[must_use]
    pub fn default_sampler() -> Self {
        Self::Default
    }

    /// Returns a deterministic sampler seeded with the given value.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Picks an index uniformly from `0..len`, or `None` when `len` is zero.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = match self {
            Sampler::Default => rand::rng().random_range(0..len),
            Sampler::Seeded(rng) => rng.random_range(0..len),
        };
        Some(index)
    }

    /// Returns true if this sampler is seeded.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        matches!(self, Sampler::Seeded(_))
    }
}

/// Deterministic seed for tests and doc examples.
pub const FIXED_TEST_SEED: u64 = 1_700_000_000;

/// Returns a `Sampler` seeded at the deterministic test seed.
#[must_use]
pub fn fixed_sampler() -> Sampler {
    Sampler::seeded(FIXED_TEST_SEED)
}
