use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::render::PixelBuffer;

/// What the viewer asked for after a presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Continue,
    Quit,
}

/// The presenting side of the pipeline: owns the SDL window and the streaming
/// texture the pixel buffer is uploaded into.
pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` borrows from `texture_creator` and must
    // drop first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture is declared before it, so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            _texture_creator: texture_creator,
            event_pump,
            width,
            height,
        })
    }

    /// Shows `buffer` without touching it.
    pub fn present_nondestructive(&mut self, buffer: &PixelBuffer) -> Result<(), String> {
        if buffer.width() != self.width || buffer.height() != self.height {
            return Err(format!(
                "buffer is {}x{} but the window is {}x{}",
                buffer.width(),
                buffer.height(),
                self.width,
                self.height
            ));
        }

        self.texture
            .update(None, buffer.as_bytes(), (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    /// Shows `buffer`, then resets it to blank for the next batch of draws.
    pub fn present(&mut self, buffer: &mut PixelBuffer) -> Result<(), String> {
        self.present_nondestructive(buffer)?;
        buffer.reset();
        Ok(())
    }

    /// Blocks until Enter or Space (continue) or Escape or a window close
    /// (quit).
    pub fn wait_for_advance(&mut self) -> Advance {
        loop {
            match self.event_pump.wait_event() {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Advance::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::Return | Keycode::KpEnter | Keycode::Space),
                    ..
                } => return Advance::Continue,
                _ => {}
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
