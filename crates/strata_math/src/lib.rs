// Re-export glam for convenience
pub use glam::*;

// Strata math types
mod basis;
mod interval;
mod overrange;
mod ray;

pub use basis::{NearZero, Onb, NEAR_ZERO_EPSILON};
pub use interval::Interval;
pub use overrange::Overrange;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(0.25, 0.5);
        let b = Vec2::splat(0.5);
        assert_eq!(a + b, Vec2::new(0.75, 1.0));
        assert_eq!(a * 2.0 - 1.0, Vec2::new(-0.5, 0.0));
    }
}
