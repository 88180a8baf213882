/// A point in scene space carrying a shading intensity.
///
/// `x`, `y` and `z` are scene coordinates; `h` is an intensity in `[0, 1]`
/// that projection and interpolation carry along unchanged in meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub h: f32,
}

impl Point3D {
    pub const fn new(x: f32, y: f32, z: f32, h: f32) -> Self {
        Self { x, y, z, h }
    }
}

/// Integer pixel coordinates after projection or placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The pixel at a centre-relative (+Y up) position around `self`.
    ///
    /// Results outside the `i32` range saturate, and a non-finite offset maps
    /// to `i32::MIN`, so an unrepresentable position always lands outside any
    /// buffer instead of wrapping back in.
    pub fn offset_by(self, x: f32, y: f32) -> Self {
        Self::new(saturating_axis(self.x, x), saturating_axis(self.y, -y))
    }
}

fn saturating_axis(base: i32, offset: f32) -> i32 {
    if !offset.is_finite() {
        return i32::MIN;
    }
    let pixel = (base as i64).saturating_add(offset.round() as i64);
    pixel.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
