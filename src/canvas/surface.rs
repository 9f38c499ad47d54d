//! RGBA raster with a centred turtle coordinate system
//!
//! Turtle coordinates put the origin at the canvas centre with y pointing up.
//! All writes are clipped at the raster boundary, so path code never needs to
//! worry about leaving the canvas.

use crate::canvas::palette::Colour;
use image::{Rgba, RgbaImage};

/// Drawing target backed by an RGBA image buffer
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a surface of the given pixel dimensions filled with a colour
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background)),
        }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Map a turtle coordinate to a pixel coordinate, if it is on the canvas
    pub fn to_pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        let px = (f64::from(self.width()) / 2.0 + x).floor();
        let py = (f64::from(self.height()) / 2.0 - y).floor();
        if px >= 0.0 && py >= 0.0 && px < f64::from(self.width()) && py < f64::from(self.height())
        {
            Some((px as u32, py as u32))
        } else {
            None
        }
    }

    /// Write a single pixel at a turtle coordinate, clipping at the boundary
    pub fn set(&mut self, x: f64, y: f64, colour: Colour) {
        if let Some((px, py)) = self.to_pixel(x, y) {
            self.image.put_pixel(px, py, Rgba(colour));
        }
    }

    /// Read the pixel at a turtle coordinate, if it is on the canvas
    pub fn get(&self, x: f64, y: f64) -> Option<Colour> {
        self.to_pixel(x, y).map(|(px, py)| self.image.get_pixel(px, py).0)
    }

    /// Borrow the underlying image buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface, yielding the image buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
