// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Color`] value type.

use core::fmt;
use core::str::FromStr;

use crate::hex::{self, HexError, HexLayout};
use crate::source::ChannelSource;

/// An RGBA color with every channel normalized to `0.0..=1.0`.
///
/// Fields are private so the range invariant cannot be broken from outside.
/// Constructors clamp their inputs and map `NaN` to `0.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgba8([0, 0, 0, 255]);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgba8([255, 255, 255, 255]);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8([0, 0, 0, 0]);

    /// What [`Color::from_hex`] yields for digit counts other than 3, 6 or 8.
    ///
    /// Red, green and alpha are `1/255` and blue is `0`, rather than a
    /// saturated color. This is kept
    /// bit-for-bit because existing callers compare against it; use
    /// [`Color::try_from_hex`] to detect the condition instead.
    pub const FALLBACK: Self = Self::from_rgba8([1, 1, 0, 1]);

    /// Create a color from normalized channels, clamping each to `0.0..=1.0`.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    /// Create an opaque color from normalized channels.
    pub fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Create a color from `[red, green, blue, alpha]` bytes.
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            red: rgba[0] as f32 / 255.0,
            green: rgba[1] as f32 / 255.0,
            blue: rgba[2] as f32 / 255.0,
            alpha: rgba[3] as f32 / 255.0,
        }
    }

    /// Quantize to `[red, green, blue, alpha]` bytes.
    ///
    /// Each channel becomes `round(channel * 255)`, rounding halves away
    /// from zero.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }

    /// Read the four channels of a native color.
    pub fn from_source<S: ChannelSource + ?Sized>(source: &S) -> Self {
        let [r, g, b, a] = source.channels();
        Self::new(r, g, b, a)
    }

    /// Decode a hex string, never failing.
    ///
    /// Non-hex characters are dropped before the digits are classified, so
    /// `"#FFAA00"` and `"ff aa 00"` decode the same. Note that the `0` of a
    /// `0x` prefix is itself a digit and changes the count.
    /// Inputs that do not have 3, 6 or 8 digits produce [`Color::FALLBACK`].
    pub fn from_hex(input: &str) -> Self {
        match hex::decode(input) {
            Ok(rgba) => Self::from_rgba8(rgba),
            Err(err) => {
                log::debug!("hex color {input:?} fell back: {err}");
                Self::FALLBACK
            }
        }
    }

    /// Decode a hex string, reporting inputs that are not 3, 6 or 8 digits.
    pub fn try_from_hex(input: &str) -> Result<Self, HexError> {
        hex::decode(input).map(Self::from_rgba8)
    }

    /// Encode in the given channel order as uppercase hex without a prefix.
    pub fn to_hex(self, layout: HexLayout) -> alloc::string::String {
        hex::encode(self.to_rgba8(), layout)
    }

    /// `RRGGBB`, alpha dropped.
    pub fn rgb_as_hex(self) -> alloc::string::String {
        self.to_hex(HexLayout::Rgb)
    }

    /// `RRGGBBAA`, alpha last.
    pub fn rgba_as_hex(self) -> alloc::string::String {
        self.to_hex(HexLayout::Rgba)
    }

    /// `AARRGGBB`, alpha first. This is the layout [`Color::from_hex`] reads
    /// for eight digits.
    pub fn argb_as_hex(self) -> alloc::string::String {
        self.to_hex(HexLayout::Argb)
    }

    /// Red channel.
    pub const fn red(self) -> f32 {
        self.red
    }

    /// Green channel.
    pub const fn green(self) -> f32 {
        self.green
    }

    /// Blue channel.
    pub const fn blue(self) -> f32 {
        self.blue
    }

    /// Alpha channel.
    pub const fn alpha(self) -> f32 {
        self.alpha
    }

    /// Channels as `[red, green, blue, alpha]`.
    pub const fn components(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Same color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: clamp_channel(alpha),
            ..self
        }
    }

    /// A random opaque color, each of red, green and blue drawn uniformly
    /// from `0.0..=1.0`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let red = rng.random_range(0.0..=1.0);
        let green = rng.random_range(0.0..=1.0);
        let blue = rng.random_range(0.0..=1.0);
        Self::rgb(red, green, blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Writes `#AARRGGBB`, which [`Color::from_hex`] reads back.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{a:02X}{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_hex(value)
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba8(rgba)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

fn clamp_channel(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "channel is in 0..=1, so the sum is in 0.5..=255.5 and `as` saturates"
)]
fn quantize(channel: f32) -> u8 {
    (channel * 255.0 + 0.5) as u8
}
