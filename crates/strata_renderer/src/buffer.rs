//! Fixed-size 2D pixel storage and display mapping.
//!
//! Buffers are row-major with `(0, 0)` at the bottom-left corner of the
//! image, matching the camera's plane mapping and the bitmap row order.

use crate::{RenderError, RenderResult};
use glam::Vec3;
use image::{Rgb, RgbImage};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// An 8-bit display color in (red, green, blue) order.
pub type DisplayColor = [u8; 3];

/// Linear-light render target.
pub type ColorBuffer = PixelBuffer<Color>;

/// Gamma-corrected 8-bit output.
pub type DisplayBuffer = PixelBuffer<DisplayColor>;

/// Gamma used for display mapping.
pub const DISPLAY_GAMMA: f32 = 2.2;

/// A 2D grid of pixels whose size is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<T> {
    width: u32,
    height: u32,
    pixels: Vec<T>,
}

impl<T: Copy + Default> PixelBuffer<T> {
    /// Create a buffer filled with `T::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![T::default(); width as usize * height as usize],
        }
    }
}

impl<T> PixelBuffer<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in row-major order, bottom row first.
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        self.offset(x, y).map(|i| &self.pixels[i])
    }

    /// Mutable access to the pixel at (x, y), or `None` outside the buffer.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T> {
        self.offset(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, value: T) -> RenderResult<()> {
        let (width, height) = (self.width, self.height);
        let pixel = self
            .get_mut(x, y)
            .ok_or(RenderError::OutOfBounds { x, y, width, height })?;
        *pixel = value;
        Ok(())
    }

    /// Apply `func` to every pixel in place.
    pub fn for_each(&mut self, mut func: impl FnMut(&mut T)) -> &mut Self {
        self.pixels.iter_mut().for_each(&mut func);
        self
    }

    /// Apply `func` to every pixel in place, passing its (x, y) index.
    pub fn for_each_index(&mut self, mut func: impl FnMut(u32, u32, &mut T)) -> &mut Self {
        let width = self.width as usize;
        if width == 0 {
            return self;
        }
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            func((i % width) as u32, (i / width) as u32, pixel);
        }
        self
    }

    /// Build a same-sized buffer by mapping every pixel.
    pub fn map<U>(&self, func: impl FnMut(&T) -> U) -> PixelBuffer<U> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(func).collect(),
        }
    }
}

impl<T> std::ops::Index<(u32, u32)> for PixelBuffer<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        match self.get(x, y) {
            Some(pixel) => pixel,
            None => panic!(
                "pixel ({}, {}) out of bounds for {}x{} buffer",
                x, y, self.width, self.height
            ),
        }
    }
}

impl<T> std::ops::IndexMut<(u32, u32)> for PixelBuffer<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.get_mut(x, y) {
            Some(pixel) => pixel,
            None => panic!(
                "pixel ({}, {}) out of bounds for {}x{} buffer",
                x, y, width, height
            ),
        }
    }
}

/// Apply display gamma (`linear^(1/2.2)`) to a linear color.
///
/// Negative components are treated as black.
pub fn gamma_correct(color: Color) -> Color {
    color.max(Color::ZERO).powf(1.0 / DISPLAY_GAMMA)
}

/// Gamma-correct a whole buffer in place.
pub fn gamma_correction(buffer: &mut ColorBuffer) -> &mut ColorBuffer {
    buffer.for_each(|c| *c = gamma_correct(*c))
}

/// Map a linear color to 8-bit display values:
/// `clamp(255 * linear^(1/2.2), 0, 255)`.
pub fn to_display(color: Color) -> DisplayColor {
    let c = (gamma_correct(color) * 255.0).clamp(Color::ZERO, Color::splat(255.0));
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Map a linear buffer to a display buffer.
pub fn map_to_image(buffer: &ColorBuffer) -> DisplayBuffer {
    buffer.map(|c| to_display(*c))
}

impl DisplayBuffer {
    /// Convert to an `image` crate buffer (top-left origin).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(self[(x, self.height - 1 - y)])
        })
    }

    /// Save through the `image` crate; the format follows the file extension.
    pub fn save_image(&self, path: impl AsRef<std::path::Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb_image().save(path)?;
        log::info!("Saved {}x{} image to {:?}", self.width, self.height, path);
        Ok(())
    }
}
