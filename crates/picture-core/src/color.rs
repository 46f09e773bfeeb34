//! RGB color value and integer channel accumulation.
//!
//! Channels are stored as `u8`, so every `Color` is already within [0, 255].
//! Operations that sum several colors (blend, blur) accumulate into a
//! [`ChannelSum`] and divide once at the end with integer truncation.

use serde::{Deserialize, Serialize};

/// Maximum intensity of a single channel.
pub const CHANNEL_MAX: u8 = 255;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Complement every channel (`255 - c`).
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(
            CHANNEL_MAX - self.red,
            CHANNEL_MAX - self.green,
            CHANNEL_MAX - self.blue,
        )
    }

    /// Unweighted channel mean, truncated, replicated into all channels.
    #[inline]
    pub fn gray(self) -> Self {
        let avg = ((self.red as u32 + self.green as u32 + self.blue as u32) / 3) as u8;
        Self::new(avg, avg, avg)
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Channel-wise running sum of colors at full integer precision.
///
/// Sums are never rounded while accumulating; [`ChannelSum::divide`] performs
/// the single truncating division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSum {
    red: u32,
    green: u32,
    blue: u32,
}

impl ChannelSum {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, color: Color) {
        self.red += color.red as u32;
        self.green += color.green as u32;
        self.blue += color.blue as u32;
    }

    /// Divide each summed channel by `count`, truncating toward zero.
    ///
    /// `count` must be the number of colors added, which keeps the result
    /// within [0, 255].
    #[inline]
    pub fn divide(self, count: u32) -> Color {
        debug_assert!(count > 0, "division by zero count");
        Color::new(
            (self.red / count) as u8,
            (self.green / count) as u8,
            (self.blue / count) as u8,
        )
    }
}

impl FromIterator<Color> for ChannelSum {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut sum = ChannelSum::new();
        for color in iter {
            sum.add(color);
        }
        sum
    }
}
