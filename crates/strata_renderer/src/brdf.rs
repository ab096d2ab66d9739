//! Reflectance models.
//!
//! [`Brdf::evaluate`] returns the reflectance already divided by the density
//! [`Brdf::scatter`] draws directions with, so a tracer weights each bounce by
//! `evaluate * cos(theta)` and never divides by a pdf itself. The two methods
//! of one model must stay paired.

use crate::sampler::map_to_hemisphere;
use crate::{Color, Sampler};
use glam::Vec3;
use std::f32::consts::{FRAC_1_PI, TAU};
use std::sync::Arc;
use strata_math::Onb;

/// Trait for surface reflectance.
pub trait Brdf: Send + Sync {
    /// Reflectance divided by the scatter pdf, for light arriving along
    /// `incident` and leaving along `outgoing`.
    fn evaluate(&self, normal: Vec3, incident: Vec3, outgoing: Vec3) -> Color;

    /// Draw an outgoing direction in the hemisphere around `normal`.
    ///
    /// `shared` is the world's sampler, used unless the model carries its own.
    fn scatter(&self, normal: Vec3, incident: Vec3, shared: &Sampler) -> Vec3;
}

/// Ideal diffuse reflector.
///
/// Scatter density is `(e + 1) / 2pi * cos^e(theta)`; `e = 1` (the default)
/// is cosine-weighted and makes `evaluate * cos(theta)` equal to
/// `diffuse * color` for every direction.
#[derive(Debug, Clone)]
pub struct Lambertian {
    diffuse: f32,
    color: Color,
    exponent: f32,
    sampler: Option<Arc<Sampler>>,
}

impl Lambertian {
    pub fn new(diffuse: f32, color: Color) -> Self {
        Self {
            diffuse,
            color,
            exponent: 1.0,
            sampler: None,
        }
    }

    /// Set the hemisphere density exponent `e` (0 = uniform).
    pub fn with_exponent(mut self, exponent: f32) -> Self {
        self.exponent = exponent.max(0.0);
        self
    }

    /// Draw scatter samples from `sampler` instead of the world's shared pool.
    pub fn with_sampler(mut self, sampler: Arc<Sampler>) -> Self {
        self.sampler = Some(sampler);
        self
    }

    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Textbook Lambertian value `diffuse * color / pi`.
    pub fn reflectance(&self) -> Color {
        self.diffuse * self.color * FRAC_1_PI
    }

    /// Density of [`scatter`](Brdf::scatter) for `outgoing`.
    pub fn pdf(&self, normal: Vec3, outgoing: Vec3) -> f32 {
        let cos_theta = normal.normalize_or_zero().dot(outgoing.normalize_or_zero());
        if cos_theta <= 0.0 {
            return 0.0;
        }
        (self.exponent + 1.0) / TAU * cos_theta.powf(self.exponent)
    }
}

impl Brdf for Lambertian {
    fn evaluate(&self, normal: Vec3, _incident: Vec3, outgoing: Vec3) -> Color {
        let pdf = self.pdf(normal, outgoing);
        if pdf <= 0.0 {
            return Color::ZERO;
        }
        self.reflectance() / pdf
    }

    /// A near-zero normal yields a zero direction, which the tracer rejects.
    fn scatter(&self, normal: Vec3, _incident: Vec3, shared: &Sampler) -> Vec3 {
        let sampler = self.sampler.as_deref().unwrap_or(shared);
        let local = map_to_hemisphere(sampler.next_sample(), self.exponent);
        match Onb::from_normal(normal) {
            Some(onb) => onb.to_world(local),
            None => Vec3::ZERO,
        }
    }
}
