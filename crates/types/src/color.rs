use serde::{Serialize, Serializer};
use std::fmt;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`, as PDF color operators expect.
    pub fn unit_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The fixed certificate palette shared by every export backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub value: Color,
    pub muted: Color,
}

impl Palette {
    pub const CERTIFICATE: Palette = Palette {
        background: Color::rgb(0x0a, 0x0a, 0x0a),
        accent: Color::rgb(0xd4, 0xaf, 0x37),
        accent_soft: Color::rgb(0xf4, 0xe4, 0xbc),
        value: Color::rgb(0xff, 0xff, 0xff),
        muted: Color::rgb(0x6b, 0x72, 0x80),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::CERTIFICATE
    }
}
