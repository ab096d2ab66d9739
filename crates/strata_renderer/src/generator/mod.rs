//! Stratified sample generators.
//!
//! Every generator produces `num_sets * num_samples` points in `[0, 1)^2`,
//! laid out set after set. The requested sample count is rounded down to the
//! largest perfect square, so a request of 10 yields 9 samples (side 3).
//!
//! ## Variants
//!
//! - [`Regular`]: cell centers, deterministic, one set
//! - [`PureRandom`]: independent uniform draws
//! - [`Jittered`]: one random point per grid cell
//! - [`MultiJittered`]: jittered cells plus a Latin-square sub-cell layout
//! - [`NRooks`]: one sample per row and per column of an `n x n` grid
//! - [`Hammersley`]: deterministic low-discrepancy sequence, one set
//!
//! A generator whose side is 1 always yields the single pixel-center sample
//! `(0.5, 0.5)`.

mod hammersley;
mod jittered;
mod multi_jittered;
mod n_rooks;
mod pure_random;
mod regular;

pub use hammersley::{phi, Hammersley};
pub use jittered::Jittered;
pub use multi_jittered::MultiJittered;
pub use n_rooks::NRooks;
pub use pure_random::PureRandom;
pub use regular::Regular;

use glam::Vec2;
use rand::RngCore;

/// The single sample produced when the grid side is 1.
pub const CENTER_SAMPLE: Vec2 = Vec2::splat(0.5);

/// Produces stratified 2D point sets in the unit square.
pub trait SamplesGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Side length of the sample grid (`num_samples = side * side`).
    fn side(&self) -> usize;

    /// Number of decorrelated sets produced by [`generate`](Self::generate).
    fn num_sets(&self) -> usize;

    /// Generate one set of `num_samples` points.
    fn generate_set(&self, rng: &mut dyn RngCore) -> Vec<Vec2>;

    /// Actual samples per set; may be smaller than what was requested.
    fn num_samples(&self) -> usize {
        self.side() * self.side()
    }

    /// Generate all sets, flattened set after set.
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let mut samples = Vec::with_capacity(self.num_sets() * self.num_samples());
        for _ in 0..self.num_sets() {
            if self.side() == 1 {
                samples.push(CENTER_SAMPLE);
            } else {
                samples.extend(self.generate_set(rng));
            }
        }
        samples
    }
}

/// Largest side whose square does not exceed `requested` (at least 1).
pub fn side_for(requested: usize) -> usize {
    let fits = |side: usize| side.checked_mul(side).is_some_and(|sq| sq <= requested);
    let mut side = (requested as f64).sqrt() as usize;
    while side > 0 && !fits(side) {
        side -= 1;
    }
    while fits(side + 1) {
        side += 1;
    }
    if side * side != requested && requested > 0 {
        log::warn!(
            "Requested {} samples, using {} (largest perfect square)",
            requested,
            side * side
        );
    }
    side.max(1)
}

/// Uniform draw in `[0, 1)`.
#[inline]
pub(crate) fn uniform(rng: &mut dyn RngCore) -> f32 {
    use rand::Rng;
    rng.gen::<f32>()
}

/// Uniform point in `[0, 1)^2`.
#[inline]
pub(crate) fn uniform2(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(uniform(rng), uniform(rng))
}

/// Keep a point strictly below 1 after scaling; `(k + u) / n` may round up.
#[inline]
pub(crate) fn below_one(p: Vec2) -> Vec2 {
    p.min(Vec2::splat(1.0 - f32::EPSILON / 2.0))
}
