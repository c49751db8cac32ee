//! In-memory RGBA pixel surface.
//!
//! The framebuffer is the crate's own drawing context: it carries a current
//! draw color (like a renderer's "set draw color" state) and implements
//! [`PlotTarget`], so the rasterizer can draw into it directly.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::PlotTarget;

/// RGBA framebuffer in row-major order.
///
/// Out-of-bounds writes are ignored, which makes the framebuffer the place
/// where clipping happens: the rasterizer offers every point of a line and the
/// framebuffer keeps the ones that land on its surface.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels, 4 bytes each: [R, G, B, A].
    pixels: Vec<u8>,
    /// Color used by [`PlotTarget::plot`].
    draw_color: Rgba,
}

impl Framebuffer {
    /// Create a new framebuffer, cleared to transparent black.
    ///
    /// The draw color starts out as opaque white.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bresenham_line::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;

        Ok(Self { width, height, pixels: vec![0; size], draw_color: Rgba::WHITE })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw, tightly packed RGBA data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Set the color used by subsequent plots.
    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    /// Current draw color.
    #[must_use]
    pub const fn draw_color(&self) -> Rgba {
        self.draw_color
    }

    /// Check whether a point lies on the surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        for row_y in y1..y2 {
            let start = self.pixel_index(x1, row_y);
            let end = self.pixel_index(x2, row_y);
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count the pixels that currently hold exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|chunk| *chunk == rgba).count()
    }

    /// Get pixel data as a compact buffer.
    ///
    /// This is what encoders like PNG expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

impl PlotTarget for Framebuffer {
    /// Plot with the current draw color; off-surface points are dropped.
    fn plot(&mut self, point: Point) {
        if self.contains(point) {
            self.set_pixel(point.x as u32, point.y as u32, self.draw_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 20_000);
        assert_eq!(fb.draw_color(), Rgba::WHITE);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(10, 10, 20, 20, Rgba::RED);

        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.count_color(Rgba::RED), 400);
    }

    #[test]
    fn test_fill_rect_clamped() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_rect(8, 8, u32::MAX, u32::MAX, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 4);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        fb.set_pixel(100, 100, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_plot_uses_draw_color() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_draw_color(Rgba::GREEN);
        fb.plot(Point::new(3, 4));
        assert_eq!(fb.get_pixel(3, 4), Some(Rgba::GREEN));
    }

    #[test]
    fn test_plot_clips_off_surface() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);
        for point in [Point::new(-1, 0), Point::new(0, -1), Point::new(10, 0), Point::new(0, 10)] {
            fb.plot(point);
        }
        assert_eq!(fb.count_color(Rgba::BLACK), 100);
    }

    #[test]
    fn test_compact_pixels_layout() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(1, 0, Rgba::new(1, 2, 3, 4));
        let data = fb.to_compact_pixels();
        assert_eq!(data.len(), 16);
        assert_eq!(&data[4..8], &[1, 2, 3, 4]);
    }
}
