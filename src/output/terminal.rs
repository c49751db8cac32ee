//! Terminal output encoder (ASCII/ANSI).
//!
//! Renders framebuffers to terminal-compatible text output.
//! Supports two rendering modes:
//! - ASCII: Uses characters like ` .:-=+*#%@` for grayscale
//! - ANSI: Full-cell background colors with 24-bit color codes
//!
//! Each character cell covers a block of framebuffer pixels. The cell takes
//! the brightest pixel of its block rather than an average, so one-pixel-wide
//! lines stay visible when a large framebuffer is shrunk to terminal size.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Blank cells with ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
    invert: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Approximate width/height ratio of a monospace character cell.
    const CHAR_ASPECT: f32 = 2.0;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, height: None, invert: false }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    /// If not set, uses at most 80 characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Set the target height in lines.
    /// If not set, calculates from width to preserve aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height.max(1));
        self
    }

    /// Invert the output (dark on light instead of light on dark).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.compute_dimensions(fb);
        log::trace!("terminal render {:?} at {cols}x{rows}", self.mode);

        let mut output = String::with_capacity((cols as usize * 20 + 1) * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let color = self.sample_cell(fb, col, row, cols, rows);
                match self.mode {
                    TerminalMode::Ascii => output.push(Self::luma_to_char(color.luma())),
                    TerminalMode::AnsiTrueColor => {
                        let _ = write!(output, "\x1b[48;2;{};{};{}m ", color.r, color.g, color.b);
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }

        output
    }

    /// Write output directly to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }

    /// Compute target dimensions preserving aspect ratio.
    fn compute_dimensions(&self, fb: &Framebuffer) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;

        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f32 / fb_aspect / Self::CHAR_ASPECT).round() as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * fb_aspect * Self::CHAR_ASPECT).round() as u32;
                (w.max(1), h)
            }
            (None, None) => {
                let w = 80u32.min(fb.width());
                let h = (w as f32 / fb_aspect / Self::CHAR_ASPECT).round() as u32;
                (w, h.max(1))
            }
        }
    }

    /// Brightest pixel in the block of framebuffer pixels under a cell.
    fn sample_cell(&self, fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> Rgba {
        let span = |cell: u32, cells: u32, size: u32| {
            let start = (u64::from(cell) * u64::from(size) / u64::from(cells)) as u32;
            let end = (u64::from(cell + 1) * u64::from(size) / u64::from(cells)) as u32;
            start..end.clamp(start + 1, size)
        };

        let mut best = Rgba::BLACK;
        let mut best_luma = -1.0;
        for y in span(row, rows, fb.height()) {
            for x in span(col, cols, fb.width()) {
                if let Some(pixel) = fb.get_pixel(x, y) {
                    let pixel = if self.invert {
                        Rgba::new(255 - pixel.r, 255 - pixel.g, 255 - pixel.b, pixel.a)
                    } else {
                        pixel
                    };
                    let luma = pixel.luma();
                    if luma > best_luma {
                        best = pixel;
                        best_luma = luma;
                    }
                }
            }
        }
        best
    }

    /// Convert luminance (0.0-1.0) to an ASCII ramp character.
    fn luma_to_char(luma: f32) -> char {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        Self::ASCII_RAMP[idx.min(Self::ASCII_RAMP.len() - 1)]
    }
}
