//! Ball colors and paint mixing
//!
//! Colors are plain RGB with u8 channels, so every channel is in range by
//! construction and blending can never leave it.

use serde::{Deserialize, Serialize};

/// An RGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Equal-weight paint mix: the channel-wise average of both colors.
    ///
    /// Symmetric: `a.mixed_with(b) == b.mixed_with(a)`, so the order in
    /// which a contacting pair is processed does not matter.
    pub fn mixed_with(self, other: Rgb) -> Rgb {
        Rgb {
            r: mix_channel(self.r, other.r),
            g: mix_channel(self.g, other.g),
            b: mix_channel(self.b, other.b),
        }
    }
}

/// Average two channels, rounding half up
#[inline]
fn mix_channel(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}
