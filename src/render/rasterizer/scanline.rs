//! Scanline fill over interpolated edge sequences.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** ascending by y so that `y0 <= y1 <= y2`.
//! 2. **Sample each edge** once per row with [`interpolate`](crate::math::interpolate):
//!    `x01`, `x12` and the long edge `x02`.
//! 3. **Join the short edges**: `x012 = x01[..len-1] ++ x12`. The last sample
//!    of `x01` and the first of `x12` are both the middle vertex, so one is
//!    dropped. `x012` now spans the same rows as `x02`.
//! 4. **Pick sides once**: compare both sequences at the middle row. The long
//!    edge and the joined short edges never cross inside the triangle, so the
//!    side that is smaller there is the left side for every row.
//!
//! ```text
//!          v2
//!          /\
//!    x02  /  \  x12
//!        /    \
//!       /    _/ v1
//!      /  _/  x01
//!     /_/
//!    v0
//! ```
//!
//! Coordinates are centre-relative with +Y up; every row and pixel is rounded
//! to the buffer only when it is written.

use log::trace;

use super::{sort_by_y, Rasterizer, Triangle};
use crate::colors::Color;
use crate::error::RasterError;
use crate::math::interpolate::interpolate_edge;
use crate::math::Point3D;
use crate::projection::{Placement, Projector};
use crate::render::framebuffer::PixelBuffer;

/// Per-row boundaries of a y-sorted triangle, long edge and joined short edges.
pub(crate) struct EdgeSequences {
    pub long: Vec<f32>,
    pub joined: Vec<f32>,
}

impl EdgeSequences {
    /// Samples `value` along the three edges of the y-sorted `v0, v1, v2`.
    ///
    /// Both sequences are cut to a common length; rounding the two short
    /// extents separately can leave the joined side one sample longer.
    pub(crate) fn build(
        v0: &Point3D,
        v1: &Point3D,
        v2: &Point3D,
        value: impl Fn(&Point3D) -> f32,
    ) -> Result<Self, RasterError> {
        let mut joined = interpolate_edge(v0.y, value(v0), v1.y, value(v1))?;
        joined.pop();
        joined.extend(interpolate_edge(v1.y, value(v1), v2.y, value(v2))?);
        let mut long = interpolate_edge(v0.y, value(v0), v2.y, value(v2))?;

        let rows = long.len().min(joined.len());
        long.truncate(rows);
        joined.truncate(rows);
        Ok(Self { long, joined })
    }

    /// Whether the long edge is the left boundary, judged at the middle row.
    pub(crate) fn long_is_left(&self) -> bool {
        let m = self.joined.len() / 2;
        match (self.long.get(m), self.joined.get(m)) {
            (Some(long), Some(joined)) => long < joined,
            _ => true,
        }
    }

    /// Splits into `(left, right)` according to [`Self::long_is_left`].
    pub(crate) fn into_sides(self, long_is_left: bool) -> (Vec<f32>, Vec<f32>) {
        if long_is_left {
            (self.long, self.joined)
        } else {
            (self.joined, self.long)
        }
    }
}

/// Validates all three vertices and returns the triangle's x extent.
pub(crate) fn validate(
    buffer: &PixelBuffer,
    vertices: &[Point3D; 3],
) -> Result<(f32, f32), RasterError> {
    let mut x_min = f32::INFINITY;
    let mut x_max = f32::NEG_INFINITY;
    for v in vertices {
        buffer.ensure_contains(buffer.to_pixel(v.x, v.y))?;
        x_min = x_min.min(v.x);
        x_max = x_max.max(v.x);
    }
    Ok((x_min, x_max))
}

/// Fills a centre-relative triangle with a solid color.
///
/// Rows run from `y0` up to but excluding `y2`, and each row from `x_left`
/// up to but excluding `x_right`. A triangle with `y0 == y2` fills nothing.
pub fn fill_interpolated(
    buffer: &mut PixelBuffer,
    color: Color,
    triangle: &Triangle,
) -> Result<(), RasterError> {
    let [v0, v1, v2] = sort_by_y(triangle.points, |p| p.y);
    let (x_min, x_max) = validate(buffer, &[v0, v1, v2])?;
    if v0.y == v2.y {
        return Ok(());
    }

    let edges = EdgeSequences::build(&v0, &v1, &v2, |p| p.x)?;
    let long_is_left = edges.long_is_left();
    trace!(
        "scanline fill: {} rows, long edge on the {}",
        edges.long.len(),
        if long_is_left { "left" } else { "right" }
    );
    let (x_left, x_right) = edges.into_sides(long_is_left);

    let mut y = v0.y;
    while y < v2.y {
        let n = (y - v0.y) as usize;
        let (Some(&xl), Some(&xr)) = (x_left.get(n), x_right.get(n)) else {
            break;
        };
        let row = buffer.to_pixel(0.0, y).y;
        let x_end = xr.min(x_max);

        let mut x = xl.max(x_min);
        while x < x_end {
            let px = buffer.to_pixel(x, y).x;
            buffer.put(px, row, color);
            x += 1.0;
        }
        y += 1.0;
    }

    Ok(())
}

/// Scanline fill for scene-space triangles.
///
/// Vertices are projected with float precision (or taken as centre-relative
/// for [`Placement::ScreenRelative`]) before [`fill_interpolated`] runs.
pub struct ScanlineRasterizer {
    projector: Projector,
    placement: Placement,
}

impl ScanlineRasterizer {
    pub fn new(projector: Projector, placement: Placement) -> Self {
        Self {
            projector,
            placement,
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(
        &self,
        buffer: &mut PixelBuffer,
        triangle: &Triangle,
        color: Color,
    ) -> Result<(), RasterError> {
        let placed = triangle.try_map(|p| self.projector.place_preserving(p, self.placement))?;
        fill_interpolated(buffer, color, &placed)
    }
}
