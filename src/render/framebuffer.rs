//! The pixel buffer every drawing routine writes into.
//!
//! Pixels are stored row-major as packed ARGB8888 values, so pixel `(x, y)`
//! lives at index `y * width + x`. The buffer never changes size; drawing
//! routines validate their coordinates once per call and then write through
//! the unchecked-by-policy helpers below.

use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use log::debug;

use crate::colors::{self, Color};
use crate::error::RasterError;
use crate::math::ScreenPoint;

pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Creates a `width x height` buffer filled with [`colors::BLANK`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, colors::BLANK)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: vec![color.raw(); pixel_count(width, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel position of the screen-space origin.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Converts a centre-relative (+Y up) position to its pixel.
    ///
    /// Positions too large for `i32` (or not finite) saturate, so they fail
    /// [`Self::ensure_contains`] rather than overflow.
    #[inline]
    pub fn to_pixel(&self, x: f32, y: f32) -> ScreenPoint {
        self.center().offset_by(x, y)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Rejects `point` unless it lies inside the buffer.
    pub fn ensure_contains(&self, point: ScreenPoint) -> Result<(), RasterError> {
        if self.contains(point.x, point.y) {
            Ok(())
        } else {
            debug!(
                "rejecting draw call: ({}, {}) outside {}x{} buffer",
                point.x, point.y, self.width, self.height
            );
            Err(RasterError::OutOfBounds {
                x: point.x,
                y: point.y,
            })
        }
    }

    /// Fills every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.raw());
    }

    /// Resets every pixel to the blank sentinel.
    pub fn reset(&mut self) {
        self.clear(colors::BLANK);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if self.contains(x, y) {
            Some(Color(self.pixels[self.index(x, y)]))
        } else {
            None
        }
    }

    /// Writes a single pixel after a bounds check.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        self.ensure_contains(ScreenPoint::new(x, y))?;
        self.put(x, y, color);
        Ok(())
    }

    #[inline]
    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Writes a pixel the caller has already validated.
    #[inline]
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Color) {
        debug_assert!(self.contains(x, y), "unvalidated write at ({x}, {y})");
        let idx = self.index(x, y);
        self.pixels[idx] = color.raw();
    }

    /// Writes the inclusive span `x_start..=x_end` on row `y`.
    #[inline]
    pub(crate) fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Color) {
        if x_start > x_end {
            return;
        }
        let start = self.index(x_start, y);
        let end = self.index(x_end, y);
        self.pixels[start..=end].fill(color.raw());
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Views the buffer as raw bytes for texture upload (native-endian ARGB8888).
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice covers exactly the initialised pixel storage.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }

    /// Writes the buffer to an image file (format chosen from the extension).
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let rgba: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&raw| {
                let c = Color(raw);
                [c.r(), c.g(), c.b(), c.a()]
            })
            .collect();
        let img = image::RgbaImage::from_raw(self.width, self.height, rgba).ok_or_else(|| {
            image::ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))
        })?;
        img.save(path)
    }
}

/// `width * height`, computed in `usize` so large sizes cannot wrap.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.pixels().len(), 12);
        assert!(buffer.pixels().iter().all(|&p| p == colors::BLANK.raw()));
    }

    #[test]
    fn index_is_row_major() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set_pixel(1, 2, colors::RED).unwrap();
        assert_eq!(buffer.pixels()[2 * 4 + 1], colors::RED.raw());
        assert_eq!(buffer.get(1, 2), Some(colors::RED));
    }

    #[test]
    fn out_of_bounds_writes_are_rejected() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert_eq!(
            buffer.set_pixel(4, 0, colors::RED),
            Err(RasterError::OutOfBounds { x: 4, y: 0 })
        );
        assert_eq!(
            buffer.set_pixel(0, -1, colors::RED),
            Err(RasterError::OutOfBounds { x: 0, y: -1 })
        );
        assert!(buffer.pixels().iter().all(|&p| p == colors::BLANK.raw()));
        assert_eq!(buffer.get(-1, 0), None);
    }

    #[test]
    fn reset_restores_blank() {
        let mut buffer = PixelBuffer::filled(2, 2, colors::GREEN);
        buffer.reset();
        assert!(buffer.pixels().iter().all(|&p| p == colors::BLANK.raw()));
    }

    #[test]
    fn center_relative_positions_flip_y() {
        let buffer = PixelBuffer::new(10, 8);
        assert_eq!(buffer.to_pixel(0.0, 0.0), ScreenPoint::new(5, 4));
        assert_eq!(buffer.to_pixel(2.4, 1.6), ScreenPoint::new(7, 2));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn size_is_computed_without_u32_overflow() {
        assert_eq!(pixel_count(70_000, 70_000), 4_900_000_000);
        let buffer = PixelBuffer::new(65_536, 2);
        assert_eq!(buffer.pixels().len(), 131_072);
    }

    #[test]
    fn byte_view_covers_every_pixel() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.as_bytes().len(), 24);
    }

    #[test]
    fn span_fill_is_inclusive() {
        let mut buffer = PixelBuffer::new(5, 1);
        buffer.fill_span(0, 1, 3, colors::BLUE);
        let row: Vec<_> = (0..5).map(|x| buffer.get(x, 0).unwrap()).collect();
        assert_eq!(
            row,
            vec![colors::BLANK, colors::BLUE, colors::BLUE, colors::BLUE, colors::BLANK]
        );
    }
}
