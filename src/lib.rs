//! A single-threaded software rasterizer.
//!
//! Everything is drawn on the CPU into a [`PixelBuffer`] of packed ARGB8888
//! colors; SDL2 is used only to show the result. The core offers:
//!
//! - Bresenham lines ([`draw_line`])
//! - triangle outlines and two independent solid fills (scanline over
//!   interpolated edges, and dual-edge Bresenham with a flat-side split)
//! - a shaded fill that interpolates a per-vertex intensity
//! - perspective projection of [`Point3D`]s onto the buffer
//!
//! Every draw call validates its whole input first: a call that returns
//! [`RasterError`] has not written a single pixel.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let mut buffer = PixelBuffer::new(800, 600);
//! draw_line(&mut buffer, colors::RED, 10, 10, 200, 80)?;
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use error::RasterError;
pub use math::{interpolate, Point3D, ScreenPoint};
pub use projection::{Placement, Projector};
pub use render::{
    draw_line, FillStrategy, PixelBuffer, Rasterizer, RasterizerDispatcher, Triangle,
};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors::{self, Color};

    // Errors
    pub use crate::error::RasterError;

    // Geometry
    pub use crate::math::{interpolate, Point3D, ScreenPoint};
    pub use crate::projection::{Placement, Projector};

    // Rendering
    pub use crate::render::{
        draw_line, draw_outline, draw_outline_3d, fill_flat_side, fill_interpolated, fill_shaded,
        fill_split, BresenhamRasterizer, FillStrategy, PixelBuffer, Rasterizer,
        RasterizerDispatcher, ScanlineRasterizer, ShadedRasterizer, Triangle,
    };

    // Window
    pub use crate::window::{Advance, Window};
}
