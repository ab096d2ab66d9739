//! Error types for the renderer.

use thiserror::Error;

/// Errors that can occur while assembling a world, rendering, or exporting.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("Ray direction is degenerate (near-zero length)")]
    DegenerateRay,

    #[error("Invalid camera: {0}")]
    InvalidCamera(&'static str),

    #[error("World has no camera")]
    MissingCamera,

    #[error("World has no sky")]
    MissingSky,

    #[error("World has no sampler")]
    MissingSampler,

    #[error("World has no ray tracer")]
    MissingTracer,

    #[error("Object {0} has no BRDF assigned")]
    MissingBrdf(usize),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
