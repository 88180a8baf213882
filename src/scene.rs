//! The demo scene: a wireframe cube and one green triangle drawn in stages.
//!
//! Stages run in [`Stage::ALL`] order. Each one draws into a blank buffer and
//! is presented (and the buffer cleared) before the next.

use std::fmt;

use crate::colors::{BLACK, BLUE, GREEN, RED};
use crate::error::RasterError;
use crate::math::{Point3D, ScreenPoint};
use crate::projection::{Placement, Projector};
use crate::render::{
    draw_line, draw_outline_3d, FillStrategy, PixelBuffer, Rasterizer, RasterizerDispatcher,
    Triangle,
};

/// Four corners of a quad, drawn `a -> b -> c -> d -> a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub corners: [Point3D; 4],
}

impl Square {
    fn at_depth(z: f32) -> Self {
        Self {
            corners: [
                Point3D::new(-2.0, -0.5, z, 0.0),
                Point3D::new(-2.0, 0.5, z, 0.0),
                Point3D::new(-1.0, 0.5, z, 0.0),
                Point3D::new(-1.0, -0.5, z, 0.0),
            ],
        }
    }
}

pub fn cube_front() -> Square {
    Square::at_depth(5.0)
}

pub fn cube_back() -> Square {
    Square::at_depth(6.0)
}

/// The shaded demo triangle, in screen-relative units with per-vertex
/// intensity.
pub fn green_triangle() -> Triangle {
    Triangle::new(
        Point3D::new(-200.0, -250.0, 0.0, 0.3),
        Point3D::new(200.0, 50.0, 0.0, 0.1),
        Point3D::new(20.0, 250.0, 0.0, 1.0),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Perspective-projected cube: blue front, red back, green connectors.
    Cube,
    /// Black outline of the green triangle.
    Outline,
    /// Scanline fill.
    Filled,
    /// Scanline fill with per-vertex intensity.
    Shaded,
    /// Dual-edge Bresenham fill.
    BresenhamFilled,
    /// Fill with the configured strategy.
    Configured,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Cube,
        Stage::Outline,
        Stage::Filled,
        Stage::Shaded,
        Stage::BresenhamFilled,
        Stage::Configured,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Cube => write!(f, "Cube"),
            Stage::Outline => write!(f, "Triangle outline"),
            Stage::Filled => write!(f, "Filled triangle"),
            Stage::Shaded => write!(f, "Shaded triangle"),
            Stage::BresenhamFilled => write!(f, "Filled triangle (Bresenham)"),
            Stage::Configured => write!(f, "Filled triangle (configured)"),
        }
    }
}

/// Draws one stage into `buffer`.
///
/// `configured` is the strategy for [`Stage::Configured`]; every other stage
/// uses a fixed routine.
pub fn render_stage(
    stage: Stage,
    buffer: &mut PixelBuffer,
    projector: &Projector,
    configured: FillStrategy,
) -> Result<(), RasterError> {
    let strategy = match stage {
        Stage::Cube => return draw_cube(buffer, projector),
        Stage::Outline => {
            return draw_outline_3d(
                buffer,
                projector,
                Placement::ScreenRelative,
                BLACK,
                &green_triangle(),
            )
        }
        Stage::Filled => FillStrategy::Interpolated,
        Stage::Shaded => FillStrategy::Shaded,
        Stage::BresenhamFilled => FillStrategy::Bresenham,
        Stage::Configured => configured,
    };

    let dispatcher = RasterizerDispatcher::new(*projector, Placement::ScreenRelative, strategy);
    dispatcher.fill_triangle(buffer, &green_triangle(), GREEN)
}

/// Projects both cube faces and draws the twelve edges.
pub fn draw_cube(buffer: &mut PixelBuffer, projector: &Projector) -> Result<(), RasterError> {
    let project = |square: Square| -> Result<[ScreenPoint; 4], RasterError> {
        let [a, b, c, d] = square.corners;
        Ok([
            projector.project_to_pixel(&a)?,
            projector.project_to_pixel(&b)?,
            projector.project_to_pixel(&c)?,
            projector.project_to_pixel(&d)?,
        ])
    };
    let front = project(cube_front())?;
    let back = project(cube_back())?;
    for p in front.iter().chain(&back) {
        buffer.ensure_contains(*p)?;
    }

    let mut line = |color, from: ScreenPoint, to: ScreenPoint| {
        draw_line(buffer, color, from.x, from.y, to.x, to.y)
    };
    for i in 0..4 {
        line(BLUE, front[i], front[(i + 1) % 4])?;
    }
    for i in 0..4 {
        line(RED, back[i], back[(i + 1) % 4])?;
    }
    for i in 0..4 {
        line(GREEN, front[i], back[i])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{Color, BLANK};

    fn count(buffer: &PixelBuffer, color: Color) -> usize {
        buffer.pixels().iter().filter(|&&p| p == color.raw()).count()
    }

    fn render(stage: Stage) -> PixelBuffer {
        let projector = Projector::new(1920, 1080);
        let mut buffer = PixelBuffer::new(1920, 1080);
        render_stage(stage, &mut buffer, &projector, FillStrategy::default()).unwrap();
        buffer
    }

    #[test]
    fn every_stage_draws_something() {
        for stage in Stage::ALL {
            let buffer = render(stage);
            assert!(
                buffer.pixels().iter().any(|&p| p != BLANK.raw()),
                "{stage} drew nothing"
            );
        }
    }

    #[test]
    fn cube_uses_one_color_per_edge_group() {
        let buffer = render(Stage::Cube);
        assert!(count(&buffer, BLUE) > 0);
        assert!(count(&buffer, RED) > 0);
        assert!(count(&buffer, GREEN) > 0);
        // Connectors are drawn last and start on the front corners.
        let corner = Projector::new(1920, 1080)
            .project_to_pixel(&cube_front().corners[0])
            .unwrap();
        assert_eq!(corner, ScreenPoint::new(192, 732));
        assert_eq!(buffer.get(corner.x, corner.y), Some(GREEN));
    }

    #[test]
    fn back_face_is_smaller_than_front_face() {
        let projector = Projector::new(1920, 1080);
        let width = |square: Square| {
            let a = projector.project_to_pixel(&square.corners[0]).unwrap();
            let d = projector.project_to_pixel(&square.corners[3]).unwrap();
            d.x - a.x
        };
        assert!(width(cube_back()) < width(cube_front()));
    }

    #[test]
    fn outline_is_black_and_thin() {
        let outline = render(Stage::Outline);
        let filled = render(Stage::Filled);
        assert_eq!(outline.get(980, 290), Some(BLACK));
        assert!(count(&outline, BLACK) * 10 < count(&filled, GREEN));
    }

    #[test]
    fn configured_stage_follows_the_strategy() {
        let projector = Projector::new(1920, 1080);
        let mut configured = PixelBuffer::new(1920, 1080);
        render_stage(Stage::Configured, &mut configured, &projector, FillStrategy::Interpolated)
            .unwrap();
        assert_eq!(configured.pixels(), render(Stage::Filled).pixels());
    }

    #[test]
    fn small_buffer_rejects_the_triangle_stages() {
        let projector = Projector::new(320, 240);
        for stage in [Stage::Outline, Stage::Filled, Stage::Shaded, Stage::BresenhamFilled] {
            let mut buffer = PixelBuffer::new(320, 240);
            let result = render_stage(stage, &mut buffer, &projector, FillStrategy::default());
            assert!(
                matches!(result, Err(RasterError::OutOfBounds { .. })),
                "{stage}: {result:?}"
            );
            assert!(buffer.pixels().iter().all(|&p| p == BLANK.raw()));
        }
    }

    #[test]
    fn stage_names_match_the_log_labels() {
        assert_eq!(Stage::Cube.to_string(), "Cube");
        assert_eq!(
            Stage::BresenhamFilled.to_string(),
            "Filled triangle (Bresenham)"
        );
    }
}
