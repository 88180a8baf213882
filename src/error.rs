//! Errors raised by the rasterizer core.
//!
//! Every variant describes a failure that is detected before the first pixel
//! write, so a call that returns an error has left the buffer untouched.

use std::fmt;

/// Reasons a projection, interpolation or draw call was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RasterError {
    /// A perspective projection was asked to divide by a depth of zero.
    DivideByZero,
    /// An interpolation was requested across a zero-length independent range.
    DegenerateInterpolation {
        /// The independent value shared by both endpoints.
        at: f32,
    },
    /// An interpolation range was not finite, or too long to sample once per
    /// unit step.
    UnboundedInterpolation { from: f32, to: f32 },
    /// A coordinate fell outside `[0, width) x [0, height)`.
    OutOfBounds { x: i32, y: i32 },
    /// `fill_flat_side` was given vertices without exactly one flat pair,
    /// or with the apex on the flat row (zero height).
    NotFlatSided,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::DivideByZero => write!(f, "projection with z = 0"),
            RasterError::DegenerateInterpolation { at } => {
                write!(f, "interpolation over an empty range at {at}")
            }
            RasterError::UnboundedInterpolation { from, to } => {
                write!(f, "interpolation range {from}..{to} is not sampleable")
            }
            RasterError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) lies outside the pixel buffer")
            }
            RasterError::NotFlatSided => {
                write!(f, "triangle has no single flat side with positive height")
            }
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_pixel() {
        let err = RasterError::OutOfBounds { x: -3, y: 12 };
        assert_eq!(
            err.to_string(),
            "coordinate (-3, 12) lies outside the pixel buffer"
        );
    }

    #[test]
    fn errors_box_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(RasterError::DivideByZero);
        assert_eq!(boxed.to_string(), "projection with z = 0");
    }
}
