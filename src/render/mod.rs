//! Rasterization and drawing primitives.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only, octant-normalized line rasterization
//!
//! The rasterizer is exposed two ways: as a lazy iterator ([`LinePoints`]) for
//! callers that want the pixels themselves, and as [`rasterize`], which feeds
//! every pixel to a [`PlotTarget`].
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod bresenham;
mod primitives;
mod target;

pub use bresenham::{rasterize, rasterize_segment, LinePoints, Octant};
pub use primitives::{
    draw_line, draw_marker, draw_rect, draw_rect_outline, Drawable, MARKER_SIZE,
};
pub use target::PlotTarget;
