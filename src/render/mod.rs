//! Everything that writes pixels: the buffer, lines and triangle fills.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use framebuffer::PixelBuffer;
pub use line::draw_line;
pub use rasterizer::{
    draw_outline, draw_outline_3d, fill_flat_side, fill_interpolated, fill_shaded, fill_split,
    BresenhamRasterizer, FillStrategy, Rasterizer, RasterizerDispatcher, ScanlineRasterizer,
    ShadedRasterizer, Triangle,
};
