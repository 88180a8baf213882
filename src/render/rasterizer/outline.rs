//! Triangle outlines: three independent Bresenham lines.

use super::Triangle;
use crate::colors::Color;
use crate::error::RasterError;
use crate::math::{Point3D, ScreenPoint};
use crate::projection::{Placement, Projector};
use crate::render::framebuffer::PixelBuffer;
use crate::render::line::draw_line;

/// Draws the closed outline `a -> b -> c -> a`.
///
/// All three vertices are validated first, so either the whole outline is
/// drawn or nothing is.
pub fn draw_outline(
    buffer: &mut PixelBuffer,
    color: Color,
    triangle: &Triangle<ScreenPoint>,
) -> Result<(), RasterError> {
    for p in &triangle.points {
        buffer.ensure_contains(*p)?;
    }

    let [p0, p1, p2] = triangle.points;
    draw_line(buffer, color, p0.x, p0.y, p1.x, p1.y)?;
    draw_line(buffer, color, p1.x, p1.y, p2.x, p2.y)?;
    draw_line(buffer, color, p2.x, p2.y, p0.x, p0.y)
}

/// Places every vertex with `placement`, then draws the outline.
pub fn draw_outline_3d(
    buffer: &mut PixelBuffer,
    projector: &Projector,
    placement: Placement,
    color: Color,
    triangle: &Triangle<Point3D>,
) -> Result<(), RasterError> {
    let placed = triangle.try_map(|p| projector.place(p, placement))?;
    draw_outline(buffer, color, &placed)
}
