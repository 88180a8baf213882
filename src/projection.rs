//! Perspective projection from scene space to the pixel buffer.
//!
//! The [`Projector`] holds the screen dimensions and the two projection
//! parameters (plane distance `d` and viewport size). Scene space has its
//! origin at the centre of the screen with +Y pointing up; pixel space has its
//! origin at the top-left corner with +Y pointing down:
//!
//! ```text
//! x' = x * (d / z) * (W / viewport)
//! y' = y * (d / z) * (H / viewport) * aspect        aspect = W / H
//!
//! pixel = (W/2 + x', H/2 - y')
//! ```

use crate::error::RasterError;
use crate::math::{Point3D, ScreenPoint};

/// How a [`Point3D`] is mapped onto the screen by the 3D entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Divide by depth and scale to the screen (requires `z != 0`).
    #[default]
    Perspective,
    /// Treat `x`/`y` as pixel offsets from the screen centre; `z` is ignored.
    ScreenRelative,
}

/// Perspective projection parameters for one screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: u32,
    height: u32,
    /// Distance from the eye to the projection plane.
    distance: f32,
    /// Size of the viewport on the projection plane.
    viewport_size: f32,
}

impl Projector {
    /// Creates a projector with `d = 1` and a unit viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_viewport(width, height, 1.0, 1.0)
    }

    pub fn with_viewport(width: u32, height: u32, distance: f32, viewport_size: f32) -> Self {
        Self {
            width,
            height,
            distance,
            viewport_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn viewport_size(&self) -> f32 {
        self.viewport_size
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Pixel coordinates of the scene origin.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Projects `p` keeping float precision; `z` and `h` are copied through.
    ///
    /// The result is still centre-relative (+Y up), so that fills can keep
    /// interpolating before anything is rounded.
    pub fn project_preserving(&self, p: &Point3D) -> Result<Point3D, RasterError> {
        if p.z == 0.0 {
            return Err(RasterError::DivideByZero);
        }
        let scale = self.distance / p.z;
        let x = p.x * scale * (self.width as f32 / self.viewport_size);
        let y = p.y * scale * (self.height as f32 / self.viewport_size) * self.aspect_ratio();
        Ok(Point3D::new(x, y, p.z, p.h))
    }

    /// Projects `p` all the way to a pixel.
    pub fn project_to_pixel(&self, p: &Point3D) -> Result<ScreenPoint, RasterError> {
        let projected = self.project_preserving(p)?;
        Ok(self.to_pixel(projected.x, projected.y))
    }

    /// Translates a centre-relative point to a pixel without any perspective.
    pub fn place_screen_relative(&self, p: &Point3D) -> ScreenPoint {
        self.to_pixel(p.x, p.y)
    }

    /// Maps a point with `placement`, ending on a pixel.
    pub fn place(&self, p: &Point3D, placement: Placement) -> Result<ScreenPoint, RasterError> {
        match placement {
            Placement::Perspective => self.project_to_pixel(p),
            Placement::ScreenRelative => Ok(self.place_screen_relative(p)),
        }
    }

    /// Maps a point with `placement`, staying in centre-relative floats.
    pub fn place_preserving(&self, p: &Point3D, placement: Placement) -> Result<Point3D, RasterError> {
        match placement {
            Placement::Perspective => self.project_preserving(p),
            Placement::ScreenRelative => Ok(*p),
        }
    }

    /// Rounds a centre-relative position to its pixel, saturating positions
    /// that do not fit in `i32`.
    #[inline]
    pub fn to_pixel(&self, x: f32, y: f32) -> ScreenPoint {
        self.center().offset_by(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_hd() -> Projector {
        Projector::new(1920, 1080)
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_relative_eq!(full_hd().aspect_ratio(), 16.0 / 9.0, epsilon = 1e-6);
    }

    #[test]
    fn preserving_projection_keeps_depth_and_intensity() {
        let p = full_hd()
            .project_preserving(&Point3D::new(1.0, 0.5, 5.0, 0.7))
            .unwrap();
        assert_relative_eq!(p.x, 384.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 192.0, epsilon = 1e-3);
        assert_eq!(p.z, 5.0);
        assert_eq!(p.h, 0.7);
    }

    #[test]
    fn pixel_projection_flips_y_around_center() {
        let px = full_hd()
            .project_to_pixel(&Point3D::new(1.0, 0.5, 5.0, 0.0))
            .unwrap();
        assert_eq!(px, ScreenPoint::new(960 + 384, 540 - 192));
    }

    #[test]
    fn origin_projects_to_center() {
        let px = full_hd()
            .project_to_pixel(&Point3D::new(0.0, 0.0, 3.0, 1.0))
            .unwrap();
        assert_eq!(px, full_hd().center());
    }

    #[test]
    fn farther_points_land_closer_to_center() {
        let proj = full_hd();
        let near = proj.project_to_pixel(&Point3D::new(-2.0, 0.5, 5.0, 0.0)).unwrap();
        let far = proj.project_to_pixel(&Point3D::new(-2.0, 0.5, 6.0, 0.0)).unwrap();
        assert!((far.x - 960).abs() < (near.x - 960).abs());
        assert!((far.y - 540).abs() < (near.y - 540).abs());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let proj = full_hd();
        for p in [
            Point3D::new(1.0, 2.0, 0.0, 0.5),
            Point3D::new(0.0, 0.0, -0.0, 0.0),
        ] {
            assert_eq!(proj.project_preserving(&p), Err(RasterError::DivideByZero));
            assert_eq!(proj.project_to_pixel(&p), Err(RasterError::DivideByZero));
        }
    }

    #[test]
    fn tiny_depth_lands_outside_every_buffer() {
        let proj = Projector::new(64, 64);
        let px = proj
            .project_to_pixel(&Point3D::new(1.0, 1.0, 1e-30, 0.0))
            .unwrap();
        assert_eq!(px, ScreenPoint::new(i32::MAX, i32::MIN));
        assert_eq!(
            proj.place(&Point3D::new(-1.0, 0.0, 1e-30, 0.0), Placement::Perspective),
            Ok(ScreenPoint::new(i32::MIN, 32))
        );
    }

    #[test]
    fn screen_relative_placement_ignores_depth() {
        let proj = full_hd();
        let p = Point3D::new(20.0, 250.0, 0.0, 1.0);
        assert_eq!(proj.place_screen_relative(&p), ScreenPoint::new(980, 290));
        assert_eq!(proj.place(&p, Placement::ScreenRelative), Ok(ScreenPoint::new(980, 290)));
        assert_eq!(proj.place(&p, Placement::Perspective), Err(RasterError::DivideByZero));
    }

    #[test]
    fn viewport_parameters_scale_projection() {
        let proj = Projector::with_viewport(1920, 1080, 2.0, 4.0);
        let p = proj.project_preserving(&Point3D::new(1.0, 0.0, 5.0, 0.0)).unwrap();
        // 1 * (2/5) * (1920/4)
        assert_relative_eq!(p.x, 192.0, epsilon = 1e-3);
    }
}
