//! Background radiance for rays that escape the scene.

use crate::Color;
use glam::Vec3;

/// Color seen along a direction that hits nothing.
pub trait Sky: Send + Sync {
    fn color(&self, direction: Vec3) -> Color;
}

/// Vertical gradient from `ambient` (looking down) to `zenith` (looking up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Zenith {
    pub zenith: Color,
    pub ambient: Color,
}

impl Zenith {
    pub fn new(zenith: Color, ambient: Color) -> Self {
        Self { zenith, ambient }
    }
}

impl Sky for Zenith {
    /// A zero direction maps to the middle of the gradient.
    fn color(&self, direction: Vec3) -> Color {
        let t = direction.normalize_or_zero().y * 0.5 + 0.5;
        self.ambient.lerp(self.zenith, t)
    }
}

/// Black everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSky;

impl Sky for NoSky {
    fn color(&self, _direction: Vec3) -> Color {
        Color::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zenith_gradient() {
        let sky = Zenith::new(Color::ONE, Color::ZERO);
        assert_eq!(sky.color(Vec3::Y), Color::ONE);
        assert_eq!(sky.color(-Vec3::Y), Color::ZERO);
        assert_eq!(sky.color(Vec3::X), Color::splat(0.5));
        // Length does not matter.
        assert_eq!(sky.color(Vec3::new(0.0, 7.0, 0.0)), Color::ONE);
        assert_eq!(sky.color(Vec3::ZERO), Color::splat(0.5));
    }

    #[test]
    fn test_no_sky_is_black() {
        assert_eq!(NoSky.color(Vec3::Y), Color::ZERO);
        assert_eq!(NoSky.color(Vec3::new(1.0, -2.0, 3.0)), Color::ZERO);
    }
}
