//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Packed `0xAARRGGBB`, the layout Compose uses for `Color(0xFF...)`.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Component-wise interpolation, `fraction` clamped to `[0, 1]`.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        let mix = |start: f32, end: f32| start + (end - start) * t;
        Color(
            mix(self.0, target.0),
            mix(self.1, target.1),
            mix(self.2, target.2),
            mix(self.3, target.3),
        )
    }

    pub fn to_rgba_u8(&self) -> [u8; 4] {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.0),
            channel(self.1),
            channel(self.2),
            channel(self.3),
        ]
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const DARK_GRAY: Color = Color::from_argb(0xFF44_4444);
    pub const GRAY: Color = Color::from_argb(0xFF88_8888);
    pub const LIGHT_GRAY: Color = Color::from_argb(0xFFCC_CCCC);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}
