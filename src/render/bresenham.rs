//! Integer Bresenham line rasterization.
//!
//! The segment is first classified into one of eight octants. The octant
//! decides which axis is the *driving* axis (stepped every pixel) and which is
//! the *secondary* axis (stepped only when the decision variable says the
//! ideal line has crossed the midpoint between two candidate pixels). After
//! that normalization one loop serves every direction.
//!
//! A decision of exactly zero (the ideal line through a midpoint) always steps
//! the secondary axis. Negative-direction octants therefore mirror their
//! positive counterparts pixel for pixel, while such a segment and its reverse
//! may pick different pixels at the tie.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

use std::iter::FusedIterator;

use super::target::PlotTarget;
use crate::geometry::{LineSegment, Point};

/// Direction class of a segment.
///
/// Determined by the sign of the x displacement, the sign of the y
/// displacement and whether the segment is shallow (`|dx| >= |dy|`).
/// Zero displacements count as positive, so a single point is in
/// [`Octant::First`].
///
/// | Octant  | dx >= 0 | dy >= 0 | shallow |
/// |---------|---------|---------|---------|
/// | First   | yes     | yes     | yes     |
/// | Second  | yes     | yes     | no      |
/// | Third   | no      | yes     | no      |
/// | Fourth  | no      | yes     | yes     |
/// | Fifth   | no      | no      | yes     |
/// | Sixth   | no      | no      | no      |
/// | Seventh | yes     | no      | no      |
/// | Eighth  | yes     | no      | yes     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    /// Shallow, heading +x/+y.
    First,
    /// Steep, heading +x/+y.
    Second,
    /// Steep, heading -x/+y.
    Third,
    /// Shallow, heading -x/+y.
    Fourth,
    /// Shallow, heading -x/-y.
    Fifth,
    /// Steep, heading -x/-y.
    Sixth,
    /// Steep, heading +x/-y.
    Seventh,
    /// Shallow, heading +x/-y.
    Eighth,
}

impl Octant {
    /// Classify a displacement.
    #[must_use]
    pub fn classify(dx: i64, dy: i64) -> Self {
        let shallow = dx.unsigned_abs() >= dy.unsigned_abs();
        match (dx >= 0, dy >= 0, shallow) {
            (true, true, true) => Self::First,
            (true, true, false) => Self::Second,
            (false, true, false) => Self::Third,
            (false, true, true) => Self::Fourth,
            (false, false, true) => Self::Fifth,
            (false, false, false) => Self::Sixth,
            (true, false, false) => Self::Seventh,
            (true, false, true) => Self::Eighth,
        }
    }

    /// Octant number, 1 through 8.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
            Self::Seventh => 7,
            Self::Eighth => 8,
        }
    }

    /// Whether x is the driving axis.
    #[must_use]
    pub const fn is_shallow(self) -> bool {
        matches!(self, Self::First | Self::Fourth | Self::Fifth | Self::Eighth)
    }

    /// Whether the x displacement is non-negative.
    #[must_use]
    pub const fn x_positive(self) -> bool {
        matches!(self, Self::First | Self::Second | Self::Seventh | Self::Eighth)
    }

    /// Whether the y displacement is non-negative.
    #[must_use]
    pub const fn y_positive(self) -> bool {
        matches!(self, Self::First | Self::Second | Self::Third | Self::Fourth)
    }
}

/// Lazy sequence of the pixels on a segment, start to end inclusive.
///
/// The iterator is finite and yields exactly
/// `max(|x2 - x1|, |y2 - y1|) + 1` points, each once. Cloning it gives an
/// independent cursor at the same position, so a fresh clone taken before
/// iteration restarts the sequence.
///
/// Arithmetic runs in `i64`, so every pair of `i32` endpoints is handled
/// without overflow.
///
/// # Example
///
/// ```
/// use bresenham_line::geometry::Point;
/// use bresenham_line::render::LinePoints;
///
/// let points: Vec<Point> = LinePoints::from_coords(0, 0, 5, 2).collect();
/// assert_eq!(points.first(), Some(&Point::new(0, 0)));
/// assert_eq!(points.last(), Some(&Point::new(5, 2)));
/// assert_eq!(points.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePoints {
    octant: Octant,
    /// Driving coordinate.
    a: i64,
    /// Secondary coordinate.
    b: i64,
    a_inc: i64,
    b_inc: i64,
    /// Exclusive stop value of the driving coordinate.
    a_term: i64,
    /// Twice the absolute driving displacement.
    a_diff2: i64,
    /// Twice the absolute secondary displacement.
    b_diff2: i64,
    decision: i64,
}

impl LinePoints {
    /// Rasterize the segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let (x1, y1) = (i64::from(start.x), i64::from(start.y));
        let (x2, y2) = (i64::from(end.x), i64::from(end.y));

        let dx = x2 - x1;
        let dy = y2 - y1;
        let octant = Octant::classify(dx, dy);

        let x_inc = if octant.x_positive() { 1 } else { -1 };
        let y_inc = if octant.y_positive() { 1 } else { -1 };

        let (a, b, a_end, a_diff, b_diff, a_inc, b_inc) = if octant.is_shallow() {
            (x1, y1, x2, dx.abs(), dy.abs(), x_inc, y_inc)
        } else {
            (y1, x1, y2, dy.abs(), dx.abs(), y_inc, x_inc)
        };

        Self {
            octant,
            a,
            b,
            a_inc,
            b_inc,
            a_term: a_end + a_inc,
            a_diff2: 2 * a_diff,
            b_diff2: 2 * b_diff,
            decision: 2 * b_diff - a_diff,
        }
    }

    /// Rasterize the segment from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Direction class of the segment being rasterized.
    #[must_use]
    pub const fn octant(&self) -> Octant {
        self.octant
    }

    /// Number of points not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        (self.a_term - self.a).unsigned_abs()
    }

    /// Map the current `(a, b)` pair back to screen coordinates.
    #[inline]
    fn current(&self) -> Point {
        let (x, y) = if self.octant.is_shallow() { (self.a, self.b) } else { (self.b, self.a) };
        // Both coordinates stay between the endpoints, which are i32.
        Point::new(x as i32, y as i32)
    }
}

impl From<LineSegment> for LinePoints {
    fn from(line: LineSegment) -> Self {
        Self::new(line.start, line.end)
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.a == self.a_term {
            return None;
        }

        let point = self.current();

        self.a += self.a_inc;
        if self.decision >= 0 {
            self.b += self.b_inc;
            self.decision -= self.a_diff2;
        }
        self.decision += self.b_diff2;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

/// Plot every pixel of the segment from `(x1, y1)` to `(x2, y2)`.
///
/// Points are sent to `context` in order from start to end, both endpoints
/// included, each exactly once. Nothing is clipped: points outside the
/// target's surface are still offered to it.
///
/// A `None` context makes the call a no-op.
///
/// # Example
///
/// ```
/// use bresenham_line::geometry::Point;
/// use bresenham_line::render::rasterize;
///
/// let mut plotted: Vec<Point> = Vec::new();
/// rasterize(Some(&mut plotted), 0, 0, 2, 5);
/// assert_eq!(plotted.len(), 6);
///
/// rasterize(None::<&mut Vec<Point>>, 0, 0, 2, 5);
/// ```
pub fn rasterize<C>(context: Option<&mut C>, x1: i32, y1: i32, x2: i32, y2: i32)
where
    C: PlotTarget + ?Sized,
{
    let Some(context) = context else {
        return;
    };

    for point in LinePoints::from_coords(x1, y1, x2, y2) {
        context.plot(point);
    }
}

/// Plot every pixel of a [`LineSegment`]. See [`rasterize`].
pub fn rasterize_segment<C>(context: Option<&mut C>, line: LineSegment)
where
    C: PlotTarget + ?Sized,
{
    rasterize(context, line.start.x, line.start.y, line.end.x, line.end.y);
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn line(dx: i32, dy: i32) -> Vec<Point> {
        LinePoints::from_coords(0, 0, dx, dy).collect()
    }

    fn mirrored(points: &[Point], sx: i32, sy: i32) -> Vec<Point> {
        points.iter().map(|p| Point::new(p.x * sx, p.y * sy)).collect()
    }

    fn assert_mirrors(dx: i32, dy: i32) -> std::result::Result<(), TestCaseError> {
        let base = line(dx, dy);
        prop_assert_eq!(line(-dx, dy), mirrored(&base, -1, 1));
        prop_assert_eq!(line(dx, -dy), mirrored(&base, 1, -1));
        prop_assert_eq!(line(-dx, -dy), mirrored(&base, -1, -1));
        Ok(())
    }

    proptest! {
        /// Negative-direction octants are coordinate mirrors of the positive ones.
        #[test]
        fn prop_octants_mirror(dx in 0i32..200, dy in 0i32..200) {
            assert_mirrors(dx, dy)?;
            assert_mirrors(dy, dx)?;
        }

        /// Mirroring holds where every other step is an exact midpoint tie.
        #[test]
        fn prop_octants_mirror_on_ties(half in 1i32..100) {
            assert_mirrors(2 * half, half)?;
            assert_mirrors(half, 2 * half)?;
        }
    }
}
