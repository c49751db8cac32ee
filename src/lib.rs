//! # bresenham-line
//!
//! Integer-only line rasterization using Bresenham's algorithm.
//!
//! Given two endpoints, the rasterizer yields every pixel of the discrete
//! approximation of the segment between them, both endpoints included, each
//! exactly once, in order from start to end. No floating point is involved
//! and all eight octants share one loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use bresenham_line::prelude::*;
//!
//! // Iterate the pixels directly
//! let points: Vec<Point> = LineSegment::from_coords(0, 0, 5, 2).into_iter().collect();
//! assert_eq!(points[2], Point::new(2, 1));
//!
//! // Or plot them into a drawing context
//! let mut fb = Framebuffer::new(16, 16)?;
//! fb.set_draw_color(Rgba::WHITE);
//! rasterize(Some(&mut fb), 0, 0, 15, 6);
//! assert_eq!(fb.count_color(Rgba::WHITE), 16);
//! # Ok::<(), bresenham_line::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `demo`: YAML configuration, random scenes and the `line-demo` binary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer geometry (points, segments, rectangles).
pub mod geometry;

/// Rasterization and drawing primitives.
pub mod render;

// ============================================================================
// Surfaces and Output
// ============================================================================

/// Color type.
pub mod color;

/// In-memory RGBA framebuffer.
pub mod framebuffer;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Demo Host
// ============================================================================

/// Demo configuration.
#[cfg(feature = "demo")]
#[cfg_attr(docsrs, doc(cfg(feature = "demo")))]
pub mod config;

/// Demo scene (random line with endpoint markers).
#[cfg(feature = "demo")]
#[cfg_attr(docsrs, doc(cfg(feature = "demo")))]
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for bresenham-line operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use bresenham_line::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{LineSegment, Point, Rect};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        draw_line, draw_marker, draw_rect, rasterize, rasterize_segment, Drawable, LinePoints,
        Octant, PlotTarget,
    };
}
