//! Geometry primitives and interpolation shared by all rasterizers.

pub mod interpolate;
pub mod point;

pub use interpolate::interpolate;
pub use point::{Point3D, ScreenPoint};
