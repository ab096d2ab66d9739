//! Cameras: map pixel samples on an image plane to rays.
//!
//! The image plane is `center + p.x * u + p.y * v` for `p` in `[-1, 1]^2`, so
//! `u` and `v` are half-extent vectors. Pixel `(0, 0)` sits at the `-u, -v`
//! corner and owns the cell `[0, 1/width) x [0, 1/height)` of the normalized
//! plane.

use crate::{ColorBuffer, RenderError, RenderResult};
use glam::{UVec2, Vec2, Vec3};
use strata_math::{NearZero, Overrange, Ray, NEAR_ZERO_EPSILON};

/// Up direction used by the camera helpers when none is given.
pub const DEFAULT_VIEW_UP: Vec3 = Vec3::Z;

/// A rectangle in scene space paired with the pixel buffer rendered onto it.
#[derive(Debug, Clone)]
pub struct ImagePlane {
    center: Vec3,
    u: Vec3,
    v: Vec3,
    overrange: Overrange,
    buffer: ColorBuffer,
}

impl ImagePlane {
    pub fn new(size: UVec2, center: Vec3, u: Vec3, v: Vec3) -> Self {
        Self {
            center,
            u,
            v,
            overrange: Overrange::default(),
            buffer: ColorBuffer::new(size.x, size.y),
        }
    }

    /// Set the policy applied to plane coordinates outside the image.
    pub fn with_overrange(mut self, overrange: Overrange) -> Self {
        self.overrange = overrange;
        self
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.buffer.width(), self.buffer.height())
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn u(&self) -> Vec3 {
        self.u
    }

    pub fn v(&self) -> Vec3 {
        self.v
    }

    pub fn overrange(&self) -> Overrange {
        self.overrange
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn set_directions(&mut self, u: Vec3, v: Vec3) {
        self.u = u;
        self.v = v;
    }

    pub fn set_overrange(&mut self, overrange: Overrange) {
        self.overrange = overrange;
    }

    /// Replace the buffer with a cleared one of a new size.
    pub fn resize(&mut self, size: UVec2) {
        self.buffer = ColorBuffer::new(size.x, size.y);
    }

    pub fn buffer(&self) -> &ColorBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut ColorBuffer {
        &mut self.buffer
    }

    /// Point on the plane for `p` in `[-1, 1]^2`.
    pub fn at(&self, p: Vec2) -> Vec3 {
        let p = self.overrange.reduce2(p * 0.5 + 0.5) * 2.0 - 1.0;
        self.center + p.x * self.u + p.y * self.v
    }

    /// Point on the plane for pixel `(x, y)` plus an in-pixel offset in `[0, 1)^2`.
    pub fn map(&self, x: u32, y: u32, offset: Vec2) -> Vec3 {
        let normalized = (Vec2::new(x as f32, y as f32) + offset) / self.size().as_vec2();
        let p = self.overrange.reduce2(normalized) * 2.0 - 1.0;
        self.center + p.x * self.u + p.y * self.v
    }

    /// Check that the plane can be rendered.
    pub fn validate(&self) -> RenderResult<()> {
        if self.buffer.is_empty() {
            return Err(RenderError::InvalidCamera("image size is zero"));
        }
        if self.u.is_near_zero() {
            return Err(RenderError::InvalidCamera("u direction is near zero"));
        }
        if self.v.is_near_zero() {
            return Err(RenderError::InvalidCamera("v direction is near zero"));
        }
        Ok(())
    }
}

/// Produces rays through an [`ImagePlane`].
pub trait Camera: Send + Sync {
    fn plane(&self) -> &ImagePlane;

    fn plane_mut(&mut self) -> &mut ImagePlane;

    /// The ray leaving the plane at `point`.
    fn ray_through(&self, point: Vec3) -> Ray;

    /// Ray for pixel `(x, y)` at the in-pixel sample offset.
    fn ray(&self, x: u32, y: u32, sample: Vec2) -> Ray {
        self.ray_through(self.plane().map(x, y, sample))
    }

    /// Ray for a normalized plane point in `[-1, 1]^2`.
    fn ray_at(&self, p: Vec2) -> Ray {
        self.ray_through(self.plane().at(p))
    }

    fn validate(&self) -> RenderResult<()> {
        self.plane().validate()
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Orthographic camera: every ray shares one view direction.
#[derive(Debug, Clone)]
pub struct Parallel {
    plane: ImagePlane,
    view_direction: Vec3,
}

impl Parallel {
    pub fn new(plane: ImagePlane, view_direction: Vec3) -> Self {
        Self {
            plane,
            view_direction,
        }
    }

    pub fn view_direction(&self) -> Vec3 {
        self.view_direction
    }

    pub fn set_view_direction(&mut self, direction: Vec3) {
        self.view_direction = direction;
    }
}

impl Camera for Parallel {
    fn plane(&self) -> &ImagePlane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut ImagePlane {
        &mut self.plane
    }

    fn ray_through(&self, point: Vec3) -> Ray {
        Ray::new(point, self.view_direction)
    }

    fn validate(&self) -> RenderResult<()> {
        self.plane.validate()?;
        if self.view_direction.is_near_zero() {
            return Err(RenderError::InvalidCamera("view direction is near zero"));
        }
        Ok(())
    }
}

/// Perspective camera: rays run from a view point through the plane.
#[derive(Debug, Clone)]
pub struct Pinhole {
    plane: ImagePlane,
    view_point: Vec3,
}

impl Pinhole {
    pub fn new(plane: ImagePlane, view_point: Vec3) -> Self {
        Self { plane, view_point }
    }

    pub fn view_point(&self) -> Vec3 {
        self.view_point
    }

    pub fn set_view_point(&mut self, view_point: Vec3) {
        self.view_point = view_point;
    }

    /// Direction from the view point to the plane center.
    pub fn view_direction(&self) -> Vec3 {
        self.plane.center() - self.view_point
    }
}

impl Camera for Pinhole {
    fn plane(&self) -> &ImagePlane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut ImagePlane {
        &mut self.plane
    }

    fn ray_through(&self, point: Vec3) -> Ray {
        Ray::new(point, point - self.view_point)
    }

    fn validate(&self) -> RenderResult<()> {
        self.plane.validate()?;
        // Height of the view point above the plane, scaled by |u x v|.
        let normal = self.plane.u().cross(self.plane.v());
        let height = self.view_direction().dot(normal).abs();
        if height <= NEAR_ZERO_EPSILON * normal.length() {
            return Err(RenderError::InvalidCamera(
                "view point lies on the image plane",
            ));
        }
        Ok(())
    }
}

fn aspect(size: UVec2) -> f32 {
    if size.x == 0 {
        0.0
    } else {
        size.y as f32 / size.x as f32
    }
}

/// Plane half-extents for a camera looking along `view_direction`.
fn plane_directions(
    size: UVec2,
    half_width: f32,
    view_direction: Vec3,
    view_up: Vec3,
) -> (Vec3, Vec3) {
    let u = half_width * view_direction.cross(view_up).normalize_or_zero();
    let v = half_width * aspect(size) * u.cross(view_direction).normalize_or_zero();
    (u, v)
}

/// Orthographic camera whose plane is `width_scalar` scene units wide.
///
/// A view direction parallel to `view_up` yields a camera that fails
/// validation.
pub fn default_parallel(
    size: UVec2,
    width_scalar: f32,
    center: Vec3,
    view_direction: Vec3,
    view_up: Vec3,
) -> Parallel {
    let (u, v) = plane_directions(size, 0.5 * width_scalar, view_direction, view_up);
    Parallel::new(ImagePlane::new(size, center, u, v), view_direction)
}

/// Perspective camera with horizontal field of view `fov` (radians).
///
/// The plane sits one unit in front of `view_point`.
pub fn default_pinhole(
    size: UVec2,
    view_point: Vec3,
    view_direction: Vec3,
    fov: f32,
    view_up: Vec3,
) -> Pinhole {
    let forward = view_direction.normalize_or_zero();
    let (u, v) = plane_directions(size, (0.5 * fov).tan(), forward, view_up);
    Pinhole::new(ImagePlane::new(size, view_point + forward, u, v), view_point)
}

/// View direction and up vector from spherical angles (radians).
///
/// `azimuth` is measured from +X in the XY plane, `zenith_angle` from +Z, and
/// `tilt_angle` rolls the camera around the view direction.
pub fn correct_view(azimuth: f32, zenith_angle: f32, tilt_angle: f32) -> (Vec3, Vec3) {
    let (sa, ca) = azimuth.sin_cos();
    let (sz, cz) = zenith_angle.sin_cos();
    let (st, ct) = tilt_angle.sin_cos();
    let direction = Vec3::new(ca * sz, sa * sz, cz);
    let up = Vec3::new(
        sa * st - ca * cz * ct,
        -ca * st - sa * cz * ct,
        sz * ct,
    );
    (direction, up)
}
