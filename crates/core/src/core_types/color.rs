//! Linear RGB color used for particles and route markers.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color with channels in `[0, 1]`.
///
/// Laid out as three packed `f32`s so a slice of colors can be handed to a
/// GPU vertex attribute as-is (see [`crate::effects::ParticleBuffer::color_data`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Dark orange (`#FF8C00`), the cool end of the flame gradient
    pub const DARK_ORANGE: Rgb = Rgb::from_hex(0x00FF_8C00);

    /// Orange red (`#FF4500`), the hot end of the flame gradient
    pub const ORANGE_RED: Rgb = Rgb::from_hex(0x00FF_4500);

    /// Yellow (`#FFFF00`)
    pub const YELLOW: Rgb = Rgb::from_hex(0x00FF_FF00);

    /// Lime (`#00FF00`)
    pub const LIME: Rgb = Rgb::from_hex(0x0000_FF00);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Per-channel linear interpolation. `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Channels as an array, in `r, g, b` order.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
