//! Triangle rasterization algorithms.
//!
//! This module provides several fill strategies that can be swapped at
//! runtime for comparison and benchmarking, plus outlines.
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: per-row x boundaries from interpolated edges
//! - [`BresenhamRasterizer`]: dual-edge Bresenham walk over flat-sided halves
//! - [`ShadedRasterizer`]: the scanline fill with per-vertex intensity
//!
//! The free functions ([`fill_interpolated`], [`fill_split`],
//! [`fill_flat_side`], [`fill_shaded`], [`draw_outline`]) are the 2D entry
//! points. The rasterizer types are the 3D entry points: they map every vertex
//! through a [`Projector`] first and then delegate to the 2D versions.

mod bresenham;
mod outline;
mod scanline;
mod shaded;

pub use bresenham::{fill_flat_side, fill_split, BresenhamRasterizer};
pub use outline::{draw_outline, draw_outline_3d};
pub use scanline::{fill_interpolated, ScanlineRasterizer};
pub use shaded::{fill_shaded, ShadedRasterizer};

use serde::Deserialize;

use super::framebuffer::PixelBuffer;
use crate::colors::Color;
use crate::error::RasterError;
use crate::math::Point3D;
use crate::projection::{Placement, Projector};

/// Three vertices in no particular order.
///
/// Neither winding nor y-order is assumed; every fill sorts its own copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<P = Point3D> {
    pub points: [P; 3],
}

impl<P> Triangle<P> {
    pub fn new(a: P, b: P, c: P) -> Self {
        Self { points: [a, b, c] }
    }

    /// Maps every vertex, stopping at the first failure.
    pub fn try_map<Q, E>(&self, mut f: impl FnMut(&P) -> Result<Q, E>) -> Result<Triangle<Q>, E> {
        let [a, b, c] = &self.points;
        Ok(Triangle::new(f(a)?, f(b)?, f(c)?))
    }
}

/// Sorts three vertices ascending by `key` with three compare-and-swaps.
pub(crate) fn sort_by_y<P, K: PartialOrd>(mut points: [P; 3], key: impl Fn(&P) -> K) -> [P; 3] {
    if key(&points[1]) < key(&points[0]) {
        points.swap(0, 1);
    }
    if key(&points[2]) < key(&points[1]) {
        points.swap(1, 2);
    }
    if key(&points[1]) < key(&points[0]) {
        points.swap(0, 1);
    }
    points
}

/// Trait for triangle fill algorithms working on scene-space triangles.
///
/// Implementors validate the whole triangle before writing, so an `Err`
/// always leaves the buffer unchanged.
pub trait Rasterizer {
    fn fill_triangle(
        &self,
        buffer: &mut PixelBuffer,
        triangle: &Triangle,
        color: Color,
    ) -> Result<(), RasterError>;
}

/// Available fill strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Scanline fill over interpolated edge sequences.
    Interpolated,
    /// Dual-edge Bresenham fill with a flat-side split.
    #[default]
    Bresenham,
    /// Scanline fill modulated by per-vertex intensity.
    Shaded,
}

impl std::fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillStrategy::Interpolated => write!(f, "Interpolated"),
            FillStrategy::Bresenham => write!(f, "Bresenham"),
            FillStrategy::Shaded => write!(f, "Shaded"),
        }
    }
}

/// Holds every rasterizer and forwards to the active one.
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    bresenham: BresenhamRasterizer,
    shaded: ShadedRasterizer,
    active: FillStrategy,
}

impl RasterizerDispatcher {
    pub fn new(projector: Projector, placement: Placement, strategy: FillStrategy) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(projector, placement),
            bresenham: BresenhamRasterizer::new(projector, placement),
            shaded: ShadedRasterizer::new(projector, placement),
            active: strategy,
        }
    }

    pub fn set_strategy(&mut self, strategy: FillStrategy) {
        self.active = strategy;
    }

    pub fn strategy(&self) -> FillStrategy {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(
        &self,
        buffer: &mut PixelBuffer,
        triangle: &Triangle,
        color: Color,
    ) -> Result<(), RasterError> {
        match self.active {
            FillStrategy::Interpolated => self.scanline.fill_triangle(buffer, triangle, color),
            FillStrategy::Bresenham => self.bresenham.fill_triangle(buffer, triangle, color),
            FillStrategy::Shaded => self.shaded.fill_triangle(buffer, triangle, color),
        }
    }
}
