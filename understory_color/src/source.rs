// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Channel extraction from native color primitives.

use crate::Color;

/// Something that can report its color as four normalized channels.
///
/// Toolkits implement this for their own color type so it can be turned into
/// a [`Color`] with [`Color::from_source`] and then formatted as hex. Values
/// outside `0.0..=1.0` are clamped on the way in, so wide-gamut or
/// extended-range sources are safe to pass through unconverted.
pub trait ChannelSource {
    /// Return `[red, green, blue, alpha]`.
    fn channels(&self) -> [f32; 4];
}

impl ChannelSource for Color {
    fn channels(&self) -> [f32; 4] {
        self.components()
    }
}

impl ChannelSource for [f32; 4] {
    fn channels(&self) -> [f32; 4] {
        *self
    }
}

impl<T: ChannelSource + ?Sized> ChannelSource for &T {
    fn channels(&self) -> [f32; 4] {
        (**self).channels()
    }
}
