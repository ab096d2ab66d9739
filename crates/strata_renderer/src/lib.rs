//! Strata Renderer - stratified-sampling Monte Carlo ray tracer
//!
//! Estimates the radiance reaching each pixel by averaging random walks
//! seeded from a precomputed pool of stratified samples.
//!
//! A render is assembled on a [`World`]: objects with BRDFs, a [`Sky`], a
//! [`Camera`], a shared [`Sampler`] and a [`RayTracer`]. [`World::render`]
//! fills the camera's [`ColorBuffer`], which [`map_to_image`] turns into
//! 8-bit pixels for [`save_bmp`] or [`DisplayBuffer::save_image`].

mod bmp;
mod brdf;
mod buffer;
mod camera;
mod config;
mod error;
pub mod generator;
mod hittable;
mod sampler;
mod sky;
mod sphere;
mod tracer;
mod world;

pub use bmp::{
    file_size, read_bmp_header, row_stride, save_bmp, write_bmp, BmpHeader, PIXEL_DATA_OFFSET,
};
pub use brdf::{Brdf, Lambertian};
pub use buffer::{
    gamma_correct, gamma_correction, map_to_image, to_display, Color, ColorBuffer, DisplayBuffer,
    DisplayColor, PixelBuffer, DISPLAY_GAMMA,
};
pub use camera::{
    correct_view, default_parallel, default_pinhole, Camera, ImagePlane, Parallel, Pinhole,
    DEFAULT_VIEW_UP,
};
pub use config::{GeneratorKind, RenderConfig, SeedPolicy};
pub use error::{RenderError, RenderResult};
pub use hittable::{nearest_hit, HitRecord, Object, HIT_EPSILON};
pub use sampler::{map_to_disk, map_to_hemisphere, Sampler};
pub use sky::{NoSky, Sky, Zenith};
pub use sphere::Sphere;
pub use tracer::{Hemisphere, IterativeHemisphere, RayTracer, Scene};
pub use world::World;

/// Re-export the math types used throughout the API
pub use strata_math::{Interval, Overrange, Ray, UVec2, Vec2, Vec3};
