//! Integer-exact line drawing.
//!
//! Bresenham's algorithm decides which pixels to illuminate using only
//! integer arithmetic. It iterates the major axis one pixel at a time and
//! tracks a decision term `p` that measures how far the ideal line has drifted
//! from the current minor-axis position. Doubling every term keeps the
//! comparison in integers:
//!
//! ```text
//! gentle (dx > dy):  p0 = 2dy - dx
//!                    p <  0  ->  p += 2dy            (stay on this row)
//!                    p >= 0  ->  p += 2(dy - dx)     (step one row)
//! ```
//!
//! Steep lines swap the roles of x and y. Vertical, horizontal and exact
//! diagonal lines need no decision term at all and get their own loops.
//! Every line writes exactly `max(dx, dy) + 1` pixels.

use crate::colors::Color;
use crate::error::RasterError;
use crate::math::ScreenPoint;
use crate::render::framebuffer::PixelBuffer;

/// Draws the segment from `(ax, ay)` to `(bx, by)` inclusive.
///
/// Both endpoints are checked before anything is written; a line with either
/// end outside the buffer is rejected as a whole rather than clipped, since
/// clipping would change its direction.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    color: Color,
    ax: i32,
    ay: i32,
    bx: i32,
    by: i32,
) -> Result<(), RasterError> {
    buffer.ensure_contains(ScreenPoint::new(ax, ay))?;
    buffer.ensure_contains(ScreenPoint::new(bx, by))?;

    let dx = (bx - ax).abs();
    let dy = (by - ay).abs();
    let width = buffer.width() as isize;
    let raw = color.raw();

    // Walk from the endpoint with the smaller major-axis coordinate so every
    // loop below only ever advances forwards.
    let ((x0, y0), (x1, y1)) = if (dx >= dy && ax <= bx) || (dx < dy && ay <= by) {
        ((ax, ay), (bx, by))
    } else {
        ((bx, by), (ax, ay))
    };

    let start = buffer.index(x0, y0) as isize;
    let pixels = buffer.pixels_mut();

    if dx == 0 {
        // Vertical: one row stride per pixel.
        let mut idx = start;
        for _ in 0..=dy {
            pixels[idx as usize] = raw;
            idx += width;
        }
    } else if dy == 0 {
        // Horizontal: contiguous run.
        let idx = start as usize;
        pixels[idx..=idx + dx as usize].fill(raw);
    } else if dx == dy {
        // Diagonal: both axes every step.
        let row_step = if y1 > y0 { width } else { -width };
        let x_step: isize = if x1 > x0 { 1 } else { -1 };
        let mut idx = start;
        for _ in 0..=dx {
            pixels[idx as usize] = raw;
            idx += row_step + x_step;
        }
    } else if dx > dy {
        // Gentle: x every step, the row only when the decision term says so.
        let row_step = if y1 > y0 { width } else { -width };
        let two_dy = 2 * dy;
        let two_dy_minus_dx = 2 * (dy - dx);
        let mut p = two_dy - dx;
        let mut idx = start;
        for _ in 0..=dx {
            pixels[idx as usize] = raw;
            idx += 1;
            if p < 0 {
                p += two_dy;
            } else {
                idx += row_step;
                p += two_dy_minus_dx;
            }
        }
    } else {
        // Steep: the row every step, x only when the decision term says so.
        let x_step: isize = if x1 > x0 { 1 } else { -1 };
        let two_dx = 2 * dx;
        let two_dx_minus_dy = 2 * (dx - dy);
        let mut p = two_dx - dy;
        let mut idx = start;
        for _ in 0..=dy {
            pixels[idx as usize] = raw;
            idx += width;
            if p < 0 {
                p += two_dx;
            } else {
                idx += x_step;
                p += two_dx_minus_dy;
            }
        }
    }

    Ok(())
}
