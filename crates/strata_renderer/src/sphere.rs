//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Object},
    Brdf, RenderError, RenderResult,
};
use glam::Vec3;
use std::sync::Arc;
use strata_math::{Interval, Ray};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    brdf: Option<Arc<dyn Brdf>>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, brdf: Option<Arc<dyn Brdf>>) -> RenderResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            brdf,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Object for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first; fall back to the far root when the origin is inside
        let mut root = (h - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (h + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            object: self,
        })
    }

    fn brdf(&self) -> Option<&dyn Brdf> {
        self.brdf.as_deref()
    }

    fn set_brdf(&mut self, brdf: Arc<dyn Brdf>) {
        self.brdf = Some(brdf);
    }
}
