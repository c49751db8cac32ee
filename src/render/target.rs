//! Drawing contexts the rasterizer plots into.

use crate::geometry::Point;

/// Anything that can plot a single pixel.
///
/// The target owns the drawing state (color, blending, clipping); the
/// rasterizer only decides *which* pixels to plot. Implementations decide for
/// themselves what to do with points that fall outside their surface.
pub trait PlotTarget {
    /// Plot one pixel with the target's current drawing state.
    fn plot(&mut self, point: Point);
}

/// Records every plotted point, in order, without clipping.
impl PlotTarget for Vec<Point> {
    fn plot(&mut self, point: Point) {
        self.push(point);
    }
}

impl<T: PlotTarget + ?Sized> PlotTarget for &mut T {
    fn plot(&mut self, point: Point) {
        (**self).plot(point);
    }
}

impl<T: PlotTarget + ?Sized> PlotTarget for Box<T> {
    fn plot(&mut self, point: Point) {
        (**self).plot(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut points = Vec::new();
        points.plot(Point::new(1, 2));
        points.plot(Point::new(-3, 4));
        assert_eq!(points, vec![Point::new(1, 2), Point::new(-3, 4)]);
    }

    #[test]
    fn test_boxed_target() {
        let mut boxed: Box<Vec<Point>> = Box::default();
        boxed.plot(Point::ORIGIN);
        assert_eq!(boxed.len(), 1);
    }
}
