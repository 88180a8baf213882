//! Scanline fill with per-vertex intensity.
//!
//! Structurally the same as [`fill_interpolated`](super::fill_interpolated):
//! the intensity `h` is sampled along the same three edges and spliced the same
//! way, so `h_left[n]` always belongs to `x_left[n]`. Each span then gets its
//! own intensity sequence from `(x_left, h_left)` to `(x_right, h_right)`.
//!
//! Unlike the plain scanline fill, both the final row and the right end of each
//! span are inclusive.

use log::trace;

use super::scanline::{validate, EdgeSequences};
use super::{sort_by_y, Rasterizer, Triangle};
use crate::colors::Color;
use crate::error::RasterError;
use crate::math::interpolate::interpolate_edge;
use crate::projection::{Placement, Projector};
use crate::render::framebuffer::PixelBuffer;

/// Fills a centre-relative triangle, scaling `color` by the interpolated `h`.
///
/// Each pixel's red, green and blue channels are multiplied by its intensity
/// (clamped to `[0, 1]`, rounded); alpha is copied from `color`.
pub fn fill_shaded(
    buffer: &mut PixelBuffer,
    color: Color,
    triangle: &Triangle,
) -> Result<(), RasterError> {
    let [v0, v1, v2] = sort_by_y(triangle.points, |p| p.y);
    let (x_min, x_max) = validate(buffer, &[v0, v1, v2])?;

    let x_edges = EdgeSequences::build(&v0, &v1, &v2, |p| p.x)?;
    let h_edges = EdgeSequences::build(&v0, &v1, &v2, |p| p.h)?;
    let long_is_left = x_edges.long_is_left();
    trace!(
        "shaded fill: {} rows, long edge on the {}",
        x_edges.long.len(),
        if long_is_left { "left" } else { "right" }
    );
    let (x_left, x_right) = x_edges.into_sides(long_is_left);
    let (h_left, h_right) = h_edges.into_sides(long_is_left);

    let mut y = v0.y;
    while y <= v2.y {
        let n = (y - v0.y) as usize;
        let (Some(&xl), Some(&xr), Some(&hl), Some(&hr)) =
            (x_left.get(n), x_right.get(n), h_left.get(n), h_right.get(n))
        else {
            break;
        };
        let row = buffer.to_pixel(0.0, y).y;
        let xl = xl.max(x_min);
        let xr = xr.min(x_max);
        let h_span = interpolate_edge(xl, hl, xr, hr)?;

        let mut x = xl;
        for &h in &h_span {
            if x > xr {
                break;
            }
            let px = buffer.to_pixel(x, y).x;
            buffer.put(px, row, color.scaled(h));
            x += 1.0;
        }
        y += 1.0;
    }

    Ok(())
}

/// Shaded fill for scene-space triangles.
pub struct ShadedRasterizer {
    projector: Projector,
    placement: Placement,
}

impl ShadedRasterizer {
    pub fn new(projector: Projector, placement: Placement) -> Self {
        Self {
            projector,
            placement,
        }
    }
}

impl Rasterizer for ShadedRasterizer {
    fn fill_triangle(
        &self,
        buffer: &mut PixelBuffer,
        triangle: &Triangle,
        color: Color,
    ) -> Result<(), RasterError> {
        let placed = triangle.try_map(|p| self.projector.place_preserving(p, self.placement))?;
        fill_shaded(buffer, color, &placed)
    }
}
