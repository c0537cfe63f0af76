//! Source of randomness shared by the scramble stages.
//!
//! A [`RandomSource`] is created once per run and handed to each stage in
//! turn. With a base seed every stage draws from its own generator seeded
//! with [`derive_seed`], so a run is reproducible while the stages stay
//! uncorrelated. Without a seed one entropy-seeded generator keeps evolving
//! across stages.
//!
//! Seeds are signed so any integer accepted on the command line is valid;
//! negative seeds use their two's complement bit pattern.

use rand::SeedableRng as _;
use rand::rngs::StdRng;

/// Randomized stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Rename,
    Reorder,
    Coerce,
}

impl Stage {
    pub fn index(self) -> u64 {
        match self {
            Self::Rename => 0,
            Self::Reorder => 1,
            Self::Coerce => 2,
        }
    }
}

/// Mixes a base seed with a stage index (SplitMix64 finalizer).
pub fn derive_seed(base: u64, stage: u64) -> u64 {
    let mut z = base.wrapping_add(stage.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[derive(Debug)]
pub struct RandomSource {
    base_seed: Option<i64>,
    rng: StdRng,
}

impl RandomSource {
    /// Seeded source when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: i64) -> Self {
        Self {
            base_seed: Some(seed),
            rng: StdRng::seed_from_u64(seed.cast_unsigned()),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            base_seed: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn base_seed(&self) -> Option<i64> {
        self.base_seed
    }

    /// Generator for `stage`.
    ///
    /// Seeded sources restart from the stage's derived seed on every call, so
    /// a stage sees the same stream no matter which stages ran before it.
    pub fn for_stage(&mut self, stage: Stage) -> &mut StdRng {
        if let Some(base) = self.base_seed {
            self.rng = StdRng::seed_from_u64(derive_seed(base.cast_unsigned(), stage.index()));
        }
        &mut self.rng
    }
}
