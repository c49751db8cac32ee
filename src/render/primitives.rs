//! Primitive rendering functions.
//!
//! Convenience layer over the rasterizer for drawing onto a [`Framebuffer`]
//! with an explicit color.

use super::bresenham::{rasterize, rasterize_segment};
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{LineSegment, Point, Rect};

/// Side length of the square drawn by [`draw_marker`].
pub const MARKER_SIZE: u32 = 3;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm.
///
/// Sets the framebuffer's draw color to `color`, then rasterizes. Pixels
/// outside the framebuffer are skipped.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    fb.set_draw_color(color);
    rasterize(Some(fb), x0, y0, x1, y1);
}

impl Drawable for LineSegment {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fb.set_draw_color(color);
        rasterize_segment(Some(fb), *self);
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle, clipped to the framebuffer.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    // Shrink by whatever hangs off the top/left edge.
    let width = width.saturating_sub(x.min(0).unsigned_abs());
    let height = height.saturating_sub(y.min(0).unsigned_abs());
    fb.fill_rect(x.max(0) as u32, y.max(0) as u32, width, height, color);
}

/// Draw a rectangle outline.
pub fn draw_rect_outline(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    color: Rgba,
    thickness: u32,
) {
    let thickness = thickness.max(1);
    let t = thickness as i32;

    // Top edge
    draw_rect(fb, x, y, width, thickness, color);
    // Bottom edge
    if height > thickness {
        draw_rect(fb, x, y + (height - thickness) as i32, width, thickness, color);
    }
    // Left edge
    if height > 2 * thickness {
        draw_rect(fb, x, y + t, thickness, height - 2 * thickness, color);
    }
    // Right edge
    if width > thickness && height > 2 * thickness {
        draw_rect(
            fb,
            x + (width - thickness) as i32,
            y + t,
            thickness,
            height - 2 * thickness,
            color,
        );
    }
}

impl Drawable for Rect {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_rect(fb, self.x, self.y, self.width, self.height, color);
    }
}

// ============================================================================
// Markers/Points
// ============================================================================

/// Draw a filled 3x3 square centered on `center`.
///
/// Used to highlight line endpoints.
pub fn draw_marker(fb: &mut Framebuffer, center: Point, color: Rgba) {
    Rect::centered(center, MARKER_SIZE).draw(fb, color);
}

impl Drawable for Point {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        if fb.contains(*self) {
            fb.set_pixel(self.x as u32, self.y as u32, color);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
