//! Radiance estimators.
//!
//! Both tracers run the same random walk: at each hit the surface's BRDF
//! scatters one new direction and the bounce is weighted by
//! `evaluate * max(0, cos(theta))`. A path ends when it escapes to the sky or
//! when the step budget runs out (black). There is no Russian roulette and no
//! direct light sampling.

use crate::hittable::{nearest_hit, HitRecord, Object, HIT_EPSILON};
use crate::{Color, RenderError, RenderResult, Sampler, Sky};
use strata_math::Ray;

/// Read-only view of the scene handed to a ray tracer.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub objects: &'a [Box<dyn Object>],
    pub sky: &'a dyn Sky,
    pub sampler: &'a Sampler,
}

impl<'a> Scene<'a> {
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'a>> {
        nearest_hit(self.objects, ray)
    }
}

/// Estimates the radiance arriving along a ray.
pub trait RayTracer: Send + Sync {
    /// Step budget; a budget of 0 always yields black.
    fn max_steps(&self) -> u32;

    /// Fails with [`RenderError::DegenerateRay`] if any ray on the path has a
    /// near-zero direction.
    fn trace_ray(&self, scene: &Scene<'_>, ray: &Ray) -> RenderResult<Color>;
}

/// Scatter one bounce. Returns the bounce weight and the continuation ray,
/// or `None` when the surface has no BRDF (treated as absorbing).
///
/// The continuation ray starts slightly above the surface so rounding in the
/// hit point cannot make it re-hit the surface it left.
fn bounce(scene: &Scene<'_>, ray: &Ray, rec: &HitRecord<'_>) -> Option<(Color, Ray)> {
    let brdf = rec.object.brdf()?;
    let normal = rec.facing_normal(ray.direction);
    let scattered = Ray::new(
        rec.point + normal * HIT_EPSILON,
        brdf.scatter(normal, ray.direction, scene.sampler),
    );
    let cos_theta = normal.dot(scattered.direction).max(0.0);
    let weight = brdf.evaluate(normal, ray.direction, scattered.direction) * cos_theta;
    Some((weight, scattered))
}

/// Recursive hemisphere estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hemisphere {
    pub max_steps: u32,
}

impl Hemisphere {
    pub fn new(max_steps: u32) -> Self {
        Self { max_steps }
    }

    fn trace_step(&self, scene: &Scene<'_>, ray: &Ray, steps: u32) -> RenderResult<Color> {
        if steps == 0 {
            return Ok(Color::ZERO);
        }
        if ray.is_degenerate() {
            return Err(RenderError::DegenerateRay);
        }

        let Some(rec) = scene.nearest_hit(ray) else {
            return Ok(scene.sky.color(ray.direction));
        };

        match bounce(scene, ray, &rec) {
            Some((weight, scattered)) => {
                Ok(weight * self.trace_step(scene, &scattered, steps - 1)?)
            }
            None => Ok(Color::ZERO),
        }
    }
}

impl RayTracer for Hemisphere {
    fn max_steps(&self) -> u32 {
        self.max_steps
    }

    fn trace_ray(&self, scene: &Scene<'_>, ray: &Ray) -> RenderResult<Color> {
        self.trace_step(scene, ray, self.max_steps)
    }
}

/// Loop form of [`Hemisphere`] carrying a multiplicative path weight.
///
/// Draws samples in the same order as the recursive form, so both agree on
/// the same sampler state up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeHemisphere {
    pub max_steps: u32,
}

impl IterativeHemisphere {
    pub fn new(max_steps: u32) -> Self {
        Self { max_steps }
    }
}

impl RayTracer for IterativeHemisphere {
    fn max_steps(&self) -> u32 {
        self.max_steps
    }

    fn trace_ray(&self, scene: &Scene<'_>, ray: &Ray) -> RenderResult<Color> {
        let mut ray = *ray;
        let mut throughput = Color::ONE;

        for _ in 0..self.max_steps {
            if ray.is_degenerate() {
                return Err(RenderError::DegenerateRay);
            }
            let Some(rec) = scene.nearest_hit(&ray) else {
                return Ok(throughput * scene.sky.color(ray.direction));
            };
            let Some((weight, scattered)) = bounce(scene, &ray, &rec) else {
                return Ok(Color::ZERO);
            };
            throughput *= weight;
            ray = scattered;
        }

        Ok(Color::ZERO)
    }
}
