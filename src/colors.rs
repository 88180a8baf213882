//! Packed ARGB8888 colors.
//!
//! Byte layout from most to least significant: alpha, red, green, blue. This is
//! the same layout SDL's `ARGB8888` streaming textures expect, so a buffer of
//! these values can be uploaded without conversion.

use std::fmt;

/// A packed 32-bit ARGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(pub u32);

pub const RED: Color = Color(0xFFFF0000);
pub const GREEN: Color = Color(0xFF00FF00);
pub const BLUE: Color = Color(0xFF0000FF);
pub const BLACK: Color = Color(0xFF000000);
/// Sentinel written to every pixel between presented frames.
pub const BLANK: Color = Color(0x00FFFFFF);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Multiplies the red, green and blue channels by `intensity`.
    ///
    /// The intensity is clamped to `[0, 1]` first and each channel is rounded
    /// to the nearest integer. Alpha is copied unchanged.
    #[inline]
    pub fn scaled(self, intensity: f32) -> Self {
        let h = intensity.clamp(0.0, 1.0);
        let scale = |c: u8| (h * c as f32).round() as u8;
        Self::from_argb(self.a(), scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
