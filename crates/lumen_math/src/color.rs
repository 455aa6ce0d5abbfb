//! Linear RGBA colors and packed 8-bit pixels.
//!
//! [`Color`] is the working representation used while tracing: four `f32`
//! channels nominally in [0, 1], allowed to go out of range while samples
//! are accumulated. [`Rgba8`] is the final, clamped, quantized pixel handed
//! to image writers and display surfaces.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub};

use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// Linear RGBA color with `f32` channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// All channels zero, including alpha. Start accumulations here.
    pub const ZERO: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Linear interpolation: `self * (1 - t) + other * t`.
    ///
    /// `t` is not clamped, so values outside [0, 1] extrapolate.
    #[inline]
    pub fn mix(self, other: Color, t: f32) -> Color {
        self * (1.0 - t) + other * t
    }

    /// Clamp every channel to [0, 1].
    pub fn clamp(self) -> Color {
        Color::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Gamma 2 encode the color channels. Alpha is left linear.
    pub fn to_gamma(self) -> Color {
        Color::new(
            linear_to_gamma(self.r),
            linear_to_gamma(self.g),
            linear_to_gamma(self.b),
            self.a,
        )
    }

    /// Clamp to [0, 1] and quantize to 8 bits per channel.
    pub fn to_rgba8(self) -> Rgba8 {
        let c = self.clamp();
        Rgba8::new(
            quantize(c.r),
            quantize(c.g),
            quantize(c.b),
            quantize(c.a),
        )
    }

    /// The color channels as a vector, dropping alpha.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

#[inline]
fn quantize(x: f32) -> u8 {
    (x * 255.0).round() as u8
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::rgb(v.x, v.y, v.z)
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a as f32 / 255.0,
        )
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

/// Channel-wise product, used to apply attenuation.
impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, t: f32) -> Color {
        Color::new(self.r * t, self.g * t, self.b * t, self.a * t)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    #[inline]
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl MulAssign<f32> for Color {
    #[inline]
    fn mul_assign(&mut self, t: f32) {
        *self = *self * t;
    }
}

impl Div<f32> for Color {
    type Output = Color;

    #[inline]
    fn div(self, t: f32) -> Color {
        self * (1.0 / t)
    }
}

impl DivAssign<f32> for Color {
    #[inline]
    fn div_assign(&mut self, t: f32) {
        *self = *self / t;
    }
}

/// An 8-bit RGBA pixel.
///
/// Laid out as `[r, g, b, a]` in memory so a `&[Rgba8]` can be handed to
/// encoders as raw bytes with [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
    pub const BLUE: Rgba8 = Rgba8::rgb(0x00, 0x00, 0xAA);
    pub const GREEN: Rgba8 = Rgba8::rgb(0x00, 0xAA, 0x00);
    pub const CYAN: Rgba8 = Rgba8::rgb(0x00, 0xAA, 0xAA);
    pub const RED: Rgba8 = Rgba8::rgb(0xAA, 0x00, 0x00);
    pub const MAGENTA: Rgba8 = Rgba8::rgb(0xAA, 0x00, 0xAA);
    pub const BROWN: Rgba8 = Rgba8::rgb(0xAA, 0x55, 0x00);
    pub const LIGHT_GRAY: Rgba8 = Rgba8::rgb(0xAA, 0xAA, 0xAA);
    pub const DARK_GRAY: Rgba8 = Rgba8::rgb(0x55, 0x55, 0x55);
    pub const LIGHT_BLUE: Rgba8 = Rgba8::rgb(0x55, 0x55, 0xFF);
    pub const LIGHT_GREEN: Rgba8 = Rgba8::rgb(0x55, 0xFF, 0x55);
    pub const LIGHT_CYAN: Rgba8 = Rgba8::rgb(0x55, 0xFF, 0xFF);
    pub const LIGHT_RED: Rgba8 = Rgba8::rgb(0xFF, 0x55, 0x55);
    pub const LIGHT_MAGENTA: Rgba8 = Rgba8::rgb(0xFF, 0x55, 0xFF);
    pub const YELLOW: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0x55);
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Pack with red in the most significant byte: `0xRRGGBBAA`.
    #[inline]
    pub const fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Inverse of [`Rgba8::to_rgba_u32`].
    #[inline]
    pub const fn from_rgba_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Self::new(r, g, b, a)
    }

    /// Pack with red in the least significant byte: `0xAABBGGRR`.
    ///
    /// This matches the in-memory byte order of `Rgba8` on little-endian
    /// targets, which is what most framebuffer APIs expect.
    #[inline]
    pub const fn to_abgr_u32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Inverse of [`Rgba8::to_abgr_u32`].
    #[inline]
    pub const fn from_abgr_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self::new(r, g, b, a)
    }

    /// Channels as an array, in `[r, g, b, a]` order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
