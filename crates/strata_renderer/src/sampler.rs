//! Sample pool shared by the camera and the BRDFs.
//!
//! A [`Sampler`] owns the flattened output of one generator and hands points
//! out through a single rotating cursor. Every consumer (camera antialiasing,
//! BRDF scatter directions) draws from the same sequence, so their samples are
//! correlated within a run. A BRDF that needs an independent stream can carry
//! its own sampler instead (see [`crate::Lambertian::with_sampler`]).

use crate::generator::SamplesGenerator;
use glam::{Vec2, Vec3};
use rand::RngCore;
use std::f32::consts::{FRAC_PI_4, TAU};
use std::sync::atomic::{AtomicUsize, Ordering};
use strata_math::NearZero;

/// Rotating pool of precomputed unit-square samples.
#[derive(Debug)]
pub struct Sampler {
    samples: Vec<Vec2>,
    num_samples: usize,
    num_sets: usize,
    cursor: AtomicUsize,
}

impl Sampler {
    /// Generate all sample sets up front.
    pub fn new(generator: &dyn SamplesGenerator, rng: &mut dyn RngCore) -> Self {
        let samples = generator.generate(rng);
        log::debug!(
            "Sampler created: {} generator, {} sets x {} samples",
            generator.name(),
            generator.num_sets(),
            generator.num_samples()
        );
        Self {
            samples,
            num_samples: generator.num_samples(),
            num_sets: generator.num_sets(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Samples per set; the number of samples taken per pixel.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of decorrelated sets in the pool.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Total number of points in the pool.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A pool always holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All points, set after set.
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Return the sample under the cursor and advance it, wrapping to the
    /// first sample after the last.
    pub fn next_sample(&self) -> Vec2 {
        let total = self.samples.len();
        let (Ok(index) | Err(index)) =
            self.cursor
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                    Some((c + 1) % total)
                });
        self.samples[index]
    }

    /// Rewind the cursor to the first sample.
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }
}

/// Map a unit-square point onto the unit hemisphere around +Z.
///
/// The density is proportional to `cos^e(theta)`: `e = 0` is uniform over the
/// hemisphere, `e = 1` is cosine-weighted.
pub fn map_to_hemisphere(p: Vec2, e: f32) -> Vec3 {
    let (sin_phi, cos_phi) = (TAU * p.x).sin_cos();
    let cos_theta = (1.0 - p.y).powf(1.0 / (e + 1.0));
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Map a unit-square point onto the unit disk (Shirley-Chiu concentric map).
pub fn map_to_disk(p: Vec2) -> Vec2 {
    let point = p * 2.0 - 1.0;
    if point.is_near_zero() {
        return Vec2::ZERO;
    }
    let (r, phi) = if point.x > -point.y {
        if point.x > point.y {
            (point.x, point.y / point.x)
        } else {
            (point.y, 2.0 - point.x / point.y)
        }
    } else if point.x < point.y {
        (-point.x, 4.0 + point.y / point.x)
    } else {
        (-point.y, 6.0 - point.x / point.y)
    };
    let (sin_phi, cos_phi) = (phi * FRAC_PI_4).sin_cos();
    r * Vec2::new(cos_phi, sin_phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{MultiJittered, Regular};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sampler_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let sampler = Sampler::new(&MultiJittered::new(3, 10), &mut rng);
        assert_eq!(sampler.num_samples(), 9);
        assert_eq!(sampler.num_sets(), 3);
        assert_eq!(sampler.len(), 27);
        assert!(!sampler.is_empty());
    }

    #[test]
    fn test_next_sample_cycles_through_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let sampler = Sampler::new(&Regular::new(4), &mut rng);
        let first: Vec<Vec2> = (0..4).map(|_| sampler.next_sample()).collect();
        assert_eq!(first, sampler.samples());
        // Wraps to the start after the last point.
        assert_eq!(sampler.next_sample(), sampler.samples()[0]);
        assert_eq!(sampler.next_sample(), sampler.samples()[1]);
    }

    #[test]
    fn test_reset_rewinds_cursor() {
        let mut rng = StdRng::seed_from_u64(1);
        let sampler = Sampler::new(&Regular::new(9), &mut rng);
        sampler.next_sample();
        sampler.next_sample();
        sampler.reset();
        assert_eq!(sampler.next_sample(), sampler.samples()[0]);
    }

    #[test]
    fn test_hemisphere_points_are_unit_and_upper() {
        let mut rng = StdRng::seed_from_u64(5);
        let sampler = Sampler::new(&MultiJittered::new(1, 64), &mut rng);
        for e in [0.0, 1.0, 10.0] {
            for p in sampler.samples() {
                let d = map_to_hemisphere(*p, e);
                assert!((d.length() - 1.0).abs() < 1e-5);
                assert!(d.z >= 0.0);
            }
        }
    }

    #[test]
    fn test_hemisphere_exponent_controls_cos_theta() {
        let p = Vec2::new(0.0, 0.75);
        assert!((map_to_hemisphere(p, 0.0).z - 0.25).abs() < 1e-6);
        assert!((map_to_hemisphere(p, 1.0).z - 0.5).abs() < 1e-6);
        assert_eq!(map_to_hemisphere(Vec2::ZERO, 1.0), Vec3::Z);
    }

    #[test]
    fn test_disk_mapping() {
        assert_eq!(map_to_disk(Vec2::splat(0.5)), Vec2::ZERO);
        let edge = map_to_disk(Vec2::new(1.0, 0.5));
        assert!((edge - Vec2::X).length() < 1e-6);
        let corner = map_to_disk(Vec2::new(0.0, 0.0));
        assert!((corner.length() - 1.0).abs() < 1e-5);
        for p in [Vec2::new(0.1, 0.9), Vec2::new(0.7, 0.2), Vec2::new(0.95, 0.95)] {
            assert!(map_to_disk(p).length() <= 1.0 + 1e-6);
        }
    }
}
