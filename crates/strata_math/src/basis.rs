use crate::{Vec2, Vec3};

/// Per-component tolerance used by [`NearZero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-6;

/// Tests whether a vector is too short to be used as a direction or basis.
///
/// The squared length is compared against `N * eps^2`, so the tolerance grows
/// with the number of components.
pub trait NearZero {
    fn is_near_zero(&self) -> bool;
}

impl NearZero for Vec2 {
    #[inline]
    fn is_near_zero(&self) -> bool {
        self.length_squared() < 2.0 * NEAR_ZERO_EPSILON * NEAR_ZERO_EPSILON
    }
}

impl NearZero for Vec3 {
    #[inline]
    fn is_near_zero(&self) -> bool {
        self.length_squared() < 3.0 * NEAR_ZERO_EPSILON * NEAR_ZERO_EPSILON
    }
}

/// Orthonormal basis whose `w` axis is a given normal.
///
/// Built with the branchless construction of Duff et al. (2017), which stays
/// well defined for normals along +Z and -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Onb {
    /// Build a basis around `normal`. Returns `None` for a near-zero normal.
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        if normal.is_near_zero() {
            return None;
        }
        let w = normal.normalize();
        let sign = 1.0_f32.copysign(w.z);
        let a = -1.0 / (sign + w.z);
        let b = w.x * w.y * a;
        let u = Vec3::new(1.0 + sign * w.x * w.x * a, sign * b, -sign * w.x);
        let v = Vec3::new(b, sign + w.y * w.y * a, -w.y);
        Some(Self { u, v, w })
    }

    /// Map a vector expressed in this basis back to world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.u * local.x + self.v * local.y + self.w * local.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(onb: &Onb) {
        assert!((onb.u.length() - 1.0).abs() < 1e-5);
        assert!((onb.v.length() - 1.0).abs() < 1e-5);
        assert!((onb.w.length() - 1.0).abs() < 1e-5);
        assert!(onb.u.dot(onb.v).abs() < 1e-5);
        assert!(onb.u.dot(onb.w).abs() < 1e-5);
        assert!(onb.v.dot(onb.w).abs() < 1e-5);
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.is_near_zero());
        assert!(Vec3::splat(1e-8).is_near_zero());
        assert!(!Vec3::new(0.0, 1e-3, 0.0).is_near_zero());
        assert!(Vec2::ZERO.is_near_zero());
        assert!(!Vec2::X.is_near_zero());
    }

    #[test]
    fn test_onb_along_z() {
        let onb = Onb::from_normal(Vec3::Z).unwrap();
        assert_eq!(onb.u, Vec3::X);
        assert_eq!(onb.v, Vec3::Y);
        assert_eq!(onb.w, Vec3::Z);
    }

    #[test]
    fn test_onb_is_orthonormal_for_many_normals() {
        let normals = [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            -Vec3::Z,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.3, 0.1, -0.9),
            Vec3::new(0.0, 0.0, -5.0),
        ];
        for n in normals {
            let onb = Onb::from_normal(n).unwrap();
            assert_orthonormal(&onb);
            assert!((onb.w - n.normalize()).length() < 1e-6);
        }
    }

    #[test]
    fn test_onb_to_world_maps_local_z_to_normal() {
        let n = Vec3::new(0.0, 1.0, 1.0);
        let onb = Onb::from_normal(n).unwrap();
        let world = onb.to_world(Vec3::Z);
        assert!((world - n.normalize()).length() < 1e-6);
    }

    #[test]
    fn test_onb_rejects_zero_normal() {
        assert!(Onb::from_normal(Vec3::ZERO).is_none());
    }
}
