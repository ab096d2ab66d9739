use super::{side_for, SamplesGenerator};
use glam::Vec2;
use rand::RngCore;

/// Radical inverse of `n` in base 2: the bits of `n` mirrored about the
/// binary point.
///
/// `phi(0) = 0`, `phi(1) = 0.5`, `phi(2) = 0.25`, `phi(3) = 0.75`.
pub fn phi(n: usize) -> f32 {
    // 2^-64
    const SCALE: f64 = 1.0 / 18_446_744_073_709_551_616.0;
    let value = ((n as u64).reverse_bits() as f64 * SCALE) as f32;
    // Very large n can round up to 1.0 in f32
    value.min(1.0 - f32::EPSILON / 2.0)
}

/// Hammersley point set: `(k / n, phi(k))`.
///
/// Deterministic, so a single set is enough.
#[derive(Debug, Clone)]
pub struct Hammersley {
    side: usize,
}

impl Hammersley {
    pub fn new(num_samples: usize) -> Self {
        Self {
            side: side_for(num_samples),
        }
    }
}

impl SamplesGenerator for Hammersley {
    fn name(&self) -> &'static str {
        "hammersley"
    }

    fn side(&self) -> usize {
        self.side
    }

    fn num_sets(&self) -> usize {
        1
    }

    fn generate_set(&self, _rng: &mut dyn RngCore) -> Vec<Vec2> {
        let n = self.num_samples();
        let cell_size = 1.0 / n as f32;
        (0..n)
            .map(|k| Vec2::new(k as f32 * cell_size, phi(k)))
            .collect()
    }
}
