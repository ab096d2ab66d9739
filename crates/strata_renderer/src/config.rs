//! Render settings loaded from JSON.
//!
//! ```json
//! { "generator": "hammersley", "samples": 64, "max_steps": 4, "seed": "wall_clock" }
//! ```
//!
//! Missing fields fall back to [`RenderConfig::default`].

use crate::generator::{
    Hammersley, Jittered, MultiJittered, NRooks, PureRandom, Regular, SamplesGenerator,
};
use crate::{RenderResult, Sampler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Sample generator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Regular,
    PureRandom,
    Jittered,
    #[default]
    MultiJittered,
    NRooks,
    Hammersley,
}

/// How the random source is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Same seed every run.
    Fixed(u64),
    /// Seed from the system clock.
    WallClock,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(1)
    }
}

impl SeedPolicy {
    pub fn seed(self) -> u64 {
        match self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::WallClock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Sample generator used for the shared sampler
    pub generator: GeneratorKind,
    /// Requested samples per pixel (rounded down to a perfect square)
    pub samples: usize,
    /// Number of decorrelated sample sets
    pub sets: usize,
    /// Step budget for the tracer
    pub max_steps: u32,
    pub seed: SeedPolicy,
    /// Hemisphere density exponent for diffuse scatter
    pub hemisphere_exponent: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::default(),
            samples: 16,
            sets: 83,
            max_steps: 5,
            seed: SeedPolicy::default(),
            hemisphere_exponent: 1.0,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_rng(&self) -> StdRng {
        let seed = self.seed.seed();
        log::debug!("Random source seeded with {}", seed);
        StdRng::seed_from_u64(seed)
    }

    pub fn build_generator(&self) -> Box<dyn SamplesGenerator> {
        let (sets, n) = (self.sets, self.samples);
        match self.generator {
            GeneratorKind::Regular => Box::new(Regular::new(n)),
            GeneratorKind::PureRandom => Box::new(PureRandom::new(sets, n)),
            GeneratorKind::Jittered => Box::new(Jittered::new(sets, n)),
            GeneratorKind::MultiJittered => Box::new(MultiJittered::new(sets, n)),
            GeneratorKind::NRooks => Box::new(NRooks::new(sets, n)),
            GeneratorKind::Hammersley => Box::new(Hammersley::new(n)),
        }
    }

    pub fn build_sampler(&self, rng: &mut StdRng) -> Arc<Sampler> {
        Arc::new(Sampler::new(self.build_generator().as_ref(), rng))
    }
}
