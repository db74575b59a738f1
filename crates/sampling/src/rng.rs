use crate::UniformSource;

/// Where a generator's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Use exactly this seed.
    Fixed(u64),
    /// Draw a fresh seed from the process' entropy-seeded generator.
    #[default]
    Entropy,
}

impl From<Option<u64>> for SeedSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }
}

impl SeedSource {
    /// Resolves to a concrete seed. Entropy seeds differ between calls.
    #[must_use]
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::Entropy => fastrand::u64(..),
        }
    }
}

/// A wyrand generator that remembers the seed it was built from.
pub struct SeededRng {
    rng: fastrand::Rng,
    seed: u64,
}

impl SeededRng {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed), seed }
    }

    /// The seed this generator started from. Feeding it back into
    /// [`SeededRng::with_seed`] replays the same stream.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for SeededRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRng").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl UniformSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Builds the generator used by a run.
///
/// A [`SeedSource::Fixed`] seed is used verbatim. Otherwise a seed is drawn
/// from entropy and logged, so the run can be reproduced with `--seed`.
#[must_use]
pub fn default_source(seed: SeedSource) -> SeededRng {
    let rng = SeededRng::with_seed(seed.resolve());
    match seed {
        SeedSource::Fixed(_) => tracing::info!("Using fixed seed {}.", rng.seed()),
        SeedSource::Entropy => tracing::info!("Using entropy seed {}.", rng.seed()),
    }
    rng
}
