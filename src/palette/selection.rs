use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of palette indices for the compositor
///
/// Implementations must return a value in `[0, len)` whenever `len > 0`.
pub trait IndexSource {
    /// Produce the next index into a collection of `len` entries
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform palette selection with replacement
///
/// Seeded runs are reproducible; unseeded runs draw their seed from the OS.
pub struct PaletteSelector {
    rng: StdRng,
}

impl PaletteSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::new)
    }
}

impl IndexSource for PaletteSelector {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
