//! Dual-edge Bresenham triangle fill.
//!
//! # Triangle Decomposition
//!
//! Any triangle can be decomposed into at most two flat-sided triangles by
//! cutting the long edge at the middle vertex's row:
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>  mid /----\ v1   <- split at v1.y
//!     /    _/v1             \    /
//!    /  _/                   \  /
//!   /_/                       \/
//!  v2                         v2
//! ```
//!
//! # Flat-Side Fill
//!
//! A flat-sided triangle has two edges running from the flat row to the
//! apex. Both are walked at the same time, each with its own integer
//! Bresenham state, and one span is filled per row between them. A gentle
//! edge may need several steps before it reaches the next row; a steep edge
//! moves exactly one row per step.
//!
//! All coordinates are pixels (+Y down); edges are always walked downwards.

use log::trace;

use super::{sort_by_y, Rasterizer, Triangle};
use crate::colors::Color;
use crate::error::RasterError;
use crate::math::ScreenPoint;
use crate::projection::{Placement, Projector};
use crate::render::framebuffer::PixelBuffer;

/// Which axis advances on every step of an edge walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slope {
    /// `dx > dy`: x moves every step, y only when the decision term allows.
    Gentle,
    /// `dx <= dy`: y moves every step, x only when the decision term allows.
    Steep,
}

/// Incremental Bresenham state for one triangle edge.
#[derive(Debug, Clone)]
struct EdgeWalker {
    x: i32,
    y: i32,
    x_step: i32,
    p: i32,
    e_same: i32,
    e_diff: i32,
    slope: Slope,
}

impl EdgeWalker {
    /// Starts at `from`, heading for `to`; `to` must not be above `from`.
    fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let x_step = if from.x < to.x { 1 } else { -1 };

        let (slope, e_same, e_diff, p) = if dx > dy {
            (Slope::Gentle, 2 * dy, 2 * (dy - dx), 2 * dy - dx)
        } else {
            (Slope::Steep, 2 * dx, 2 * (dx - dy), 2 * dx - dy)
        };

        Self {
            x: from.x,
            y: from.y,
            x_step,
            p,
            e_same,
            e_diff,
            slope,
        }
    }

    #[inline]
    fn step(&mut self) {
        match self.slope {
            Slope::Gentle => {
                self.x += self.x_step;
                if self.p < 0 {
                    self.p += self.e_same;
                } else {
                    self.y += 1;
                    self.p += self.e_diff;
                }
            }
            Slope::Steep => {
                self.y += 1;
                if self.p < 0 {
                    self.p += self.e_same;
                } else {
                    self.x += self.x_step;
                    self.p += self.e_diff;
                }
            }
        }
    }

    /// Steps until the walk enters the next row.
    ///
    /// Terminates because a walked edge always has `dy > 0`, so a gentle
    /// edge's decision term grows by `2dy` until it forces a row step.
    #[inline]
    fn next_row(&mut self) {
        let row = self.y;
        while self.y == row {
            self.step();
        }
    }
}

/// Fills a triangle whose vertices `a` and `b` share a row and whose `apex`
/// does not.
///
/// The apex may be above (flat bottom) or below (flat top) the flat row.
/// The flat row is always filled from `a` to `b` inclusive.
///
/// # Errors
/// [`RasterError::NotFlatSided`] when `a.y != b.y` or the apex lies on the
/// flat row, [`RasterError::OutOfBounds`] when any vertex is outside the
/// buffer. Nothing is written in either case.
pub fn fill_flat_side(
    buffer: &mut PixelBuffer,
    color: Color,
    apex: ScreenPoint,
    a: ScreenPoint,
    b: ScreenPoint,
) -> Result<(), RasterError> {
    if a.y != b.y || apex.y == a.y {
        return Err(RasterError::NotFlatSided);
    }
    for p in [apex, a, b] {
        buffer.ensure_contains(p)?;
    }

    let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
    let (mut l, mut r, y_end) = if apex.y < left.y {
        // Pointed top, flat bottom: both edges start at the apex.
        (EdgeWalker::new(apex, left), EdgeWalker::new(apex, right), left.y)
    } else {
        // Flat top, pointed bottom: each edge starts at its flat vertex.
        (EdgeWalker::new(left, apex), EdgeWalker::new(right, apex), apex.y)
    };

    loop {
        if l.y == left.y {
            // The flat row runs between the true vertices; a gentle walker
            // reaching it from the apex stops short of them.
            buffer.fill_span(left.y, left.x, right.x, color);
        } else {
            buffer.fill_span(l.y, l.x, r.x, color);
        }
        if l.y >= y_end {
            break;
        }
        l.next_row();
        r.next_row();
    }

    Ok(())
}

/// Fills any triangle by splitting it into flat-sided halves.
///
/// The long edge `v0 -> v2` is cut at the middle vertex's row:
/// `x_mid = round(v0.x + (v2.x - v0.x) / (v2.y - v0.y) * (v1.y - v0.y))`.
///
/// # Errors
/// [`RasterError::NotFlatSided`] for a zero-height triangle,
/// [`RasterError::OutOfBounds`] when any vertex is outside the buffer.
pub fn fill_split(
    buffer: &mut PixelBuffer,
    color: Color,
    triangle: &Triangle<ScreenPoint>,
) -> Result<(), RasterError> {
    let [v0, v1, v2] = sort_by_y(triangle.points, |p| p.y);
    for p in [v0, v1, v2] {
        buffer.ensure_contains(p)?;
    }

    if v1.y == v2.y {
        return fill_flat_side(buffer, color, v0, v1, v2);
    }
    if v0.y == v1.y {
        return fill_flat_side(buffer, color, v2, v0, v1);
    }

    let dxdy = (v2.x - v0.x) as f32 / (v2.y - v0.y) as f32;
    let mid = ScreenPoint::new(
        (dxdy * (v1.y - v0.y) as f32 + v0.x as f32).round() as i32,
        v1.y,
    );
    trace!("split fill: mid vertex {:?} -> split at {:?}", v1, mid);

    let (left, right) = if v1.x < mid.x { (v1, mid) } else { (mid, v1) };
    fill_flat_side(buffer, color, v0, left, right)?;
    fill_flat_side(buffer, color, v2, left, right)
}

/// Dual-edge Bresenham fill for scene-space triangles.
///
/// Vertices are rounded to pixels with the configured [`Placement`] first.
pub struct BresenhamRasterizer {
    projector: Projector,
    placement: Placement,
}

impl BresenhamRasterizer {
    pub fn new(projector: Projector, placement: Placement) -> Self {
        Self {
            projector,
            placement,
        }
    }
}

impl Rasterizer for BresenhamRasterizer {
    fn fill_triangle(
        &self,
        buffer: &mut PixelBuffer,
        triangle: &Triangle,
        color: Color,
    ) -> Result<(), RasterError> {
        let placed = triangle.try_map(|p| self.projector.place(p, self.placement))?;
        fill_split(buffer, color, &placed)
    }
}
