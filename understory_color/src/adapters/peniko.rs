// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Peniko adapter: treat `peniko::Color` as a channel source.
//!
//! Peniko colors are sRGB with separate alpha, which is the same model as
//! [`crate::Color`], so the conversion only clamps.
//!
//! ## Example
//!
//! ```
//! use understory_color::Color;
//!
//! let native = peniko::Color::from_rgba8(0x33, 0x66, 0x99, 0xFF);
//! assert_eq!(Color::from(native).rgb_as_hex(), "336699");
//!
//! let back: peniko::Color = Color::from_hex("#80FF0000").into();
//! assert_eq!(back.to_rgba8().a, 0x80);
//! ```

use crate::{ChannelSource, Color};

impl ChannelSource for peniko::Color {
    fn channels(&self) -> [f32; 4] {
        self.components
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        Self::from_source(&color)
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        Self::new(color.components())
    }
}
