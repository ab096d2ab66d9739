//! Object trait and HitRecord for ray-object intersection.

use crate::Brdf;
use glam::Vec3;
use std::sync::Arc;
use strata_math::{Interval, Ray};

/// Smallest accepted ray parameter.
///
/// Roots closer than this are treated as the ray's own origin. Scattered rays
/// also start this far off the surface along the facing normal.
pub const HIT_EPSILON: f32 = 1e-3;

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward-facing unit surface normal
    pub normal: Vec3,
    /// The object that was hit
    pub object: &'a dyn Object,
}

impl<'a> HitRecord<'a> {
    /// The normal flipped, if needed, to face against `direction`.
    pub fn facing_normal(&self, direction: Vec3) -> Vec3 {
        if self.normal.dot(direction) < 0.0 {
            self.normal
        } else {
            -self.normal
        }
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("t", &self.t)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Object: Send + Sync {
    /// Test if a ray hits this object within `ray_t`.
    ///
    /// Returns the nearest accepted intersection, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// The reflectance model assigned to this object.
    fn brdf(&self) -> Option<&dyn Brdf>;

    /// Assign a reflectance model.
    fn set_brdf(&mut self, brdf: Arc<dyn Brdf>);
}

/// Find the globally nearest intersection by scanning every object.
///
/// Each accepted hit shrinks the upper bound for the objects tested after it.
pub fn nearest_hit<'a>(objects: &'a [Box<dyn Object>], ray: &Ray) -> Option<HitRecord<'a>> {
    let mut closest: Option<HitRecord<'a>> = None;
    let mut ray_t = Interval::from_min(HIT_EPSILON);

    for object in objects {
        if let Some(rec) = object.hit(ray, ray_t) {
            ray_t = ray_t.with_max(rec.t);
            closest = Some(rec);
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};

    fn sphere(z: f32) -> Box<dyn Object> {
        let brdf: Arc<dyn Brdf> = Arc::new(Lambertian::new(1.0, Vec3::ONE));
        Box::new(Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, Some(brdf)).unwrap())
    }

    #[test]
    fn test_nearest_hit_picks_closest_regardless_of_order() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        for objects in [vec![sphere(-5.0), sphere(0.0)], vec![sphere(0.0), sphere(-5.0)]] {
            let rec = nearest_hit(&objects, &ray).unwrap();
            assert!((rec.t - 9.0).abs() < 1e-5);
            assert!((rec.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        }
    }

    #[test]
    fn test_nearest_hit_empty_scene() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(nearest_hit(&[], &ray).is_none());
    }

    #[test]
    fn test_facing_normal() {
        let objects = vec![sphere(0.0)];
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = nearest_hit(&objects, &ray).unwrap();
        assert_eq!(rec.facing_normal(ray.direction), Vec3::Z);
        assert_eq!(rec.facing_normal(-ray.direction), -Vec3::Z);
    }
}
