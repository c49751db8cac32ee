//! The demo scene: one line with highlighted endpoints.

use std::fmt;

use rand::Rng;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{LineSegment, Point};
use crate::render::{draw_marker, Drawable};

/// A single line to render, plus the markers on its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    line: LineSegment,
}

impl Scene {
    /// Scene for an explicit segment.
    #[must_use]
    pub const fn new(line: LineSegment) -> Self {
        Self { line }
    }

    /// Scene with both endpoints drawn uniformly from the padded area.
    ///
    /// Each coordinate is `padding + rng.gen_range(0..size - 2 * padding)`,
    /// so endpoints never land in the margin. The config must be valid
    /// (see [`DemoConfig::validate`]); a degenerate span collapses to the
    /// padding edge instead of panicking.
    pub fn random<R: Rng>(config: &DemoConfig, rng: &mut R) -> Self {
        let mut endpoint = || {
            let x = config.padding_h + rng.gen_range(0..config.span_h().max(1));
            let y = config.padding_v + rng.gen_range(0..config.span_v().max(1));
            Point::new(x as i32, y as i32)
        };
        let start = endpoint();
        let end = endpoint();
        Self::new(LineSegment::new(start, end))
    }

    /// The segment being drawn.
    #[must_use]
    pub const fn line(&self) -> LineSegment {
        self.line
    }

    /// Render the scene onto a fresh framebuffer sized from the config.
    ///
    /// Paint order is background, start marker, end marker, line, so the line
    /// is drawn over its own markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured surface size is invalid.
    pub fn render(&self, config: &DemoConfig) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(config.width, config.height)?;
        self.render_into(&mut fb, config);
        Ok(fb)
    }

    /// Render the scene onto an existing framebuffer.
    pub fn render_into(&self, fb: &mut Framebuffer, config: &DemoConfig) {
        log::debug!("rendering {self} in octant {}", self.line.octant().number());

        fb.clear(config.background);
        draw_marker(fb, self.line.start, config.start_color);
        draw_marker(fb, self.line.end, config.end_color);
        self.line.draw(fb, config.line_color);
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_display_matches_demo_output() {
        let scene = Scene::new(LineSegment::from_coords(25, 40, 700, 512));
        assert_eq!(scene.to_string(), "Line: (25, 40) -- (700, 512)");
    }

    #[test]
    fn test_random_endpoints_inside_padding() {
        let config = DemoConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let line = Scene::random(&config, &mut rng).line();
            for p in [line.start, line.end] {
                assert!((20..780).contains(&p.x), "x out of padded area: {p}");
                assert!((20..580).contains(&p.y), "y out of padded area: {p}");
            }
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let config = DemoConfig::default();
        let a = Scene::random(&config, &mut StdRng::seed_from_u64(42));
        let b = Scene::random(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_paints_markers_and_line() {
        let config = DemoConfig { width: 100, height: 80, ..DemoConfig::default() };
        let scene = Scene::new(LineSegment::from_coords(10, 10, 90, 10));

        let fb = scene.render(&config).unwrap();

        // Line pixels win over the marker centres.
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(90, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(10, 9), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(90, 11), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::WHITE), 81);
        // Two cells of each marker sit under the line.
        assert_eq!(fb.count_color(Rgba::RED), 7);
        assert_eq!(fb.count_color(Rgba::GREEN), 7);
    }

    #[test]
    fn test_render_single_point_scene() {
        let config = DemoConfig { width: 30, height: 30, ..DemoConfig::default() };
        let scene = Scene::new(LineSegment::from_coords(15, 15, 15, 15));

        let fb = scene.render(&config).unwrap();

        assert_eq!(fb.count_color(Rgba::WHITE), 1);
        // The end marker is painted after the start marker.
        assert_eq!(fb.count_color(Rgba::GREEN), 8);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_render_rejects_zero_surface() {
        let config = DemoConfig { width: 0, ..DemoConfig::default() };
        let scene = Scene::new(LineSegment::default());
        assert!(scene.render(&config).is_err());
    }
}
