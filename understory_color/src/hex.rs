// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex digit classification and formatting.
//!
//! Everything here works on `[red, green, blue, alpha]` bytes; normalization
//! lives on [`crate::Color`].

use alloc::format;
use alloc::string::String;

/// Why a string could not be read as a hex color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The input contained no hex digits at all.
    #[error("color string contains no hex digits")]
    Empty,
    /// The input had a digit count other than 3, 6 or 8.
    #[error("expected 3, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
}

/// Channel order for hex output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HexLayout {
    /// `RRGGBB`; alpha is dropped.
    Rgb,
    /// `RRGGBBAA`.
    Rgba,
    /// `AARRGGBB`, the eight-digit layout accepted by the decoder.
    Argb,
}

/// Classify the hex digits of `input` and unpack them to RGBA bytes.
///
/// Characters outside `[0-9A-Fa-f]` are skipped wherever they occur.
pub(crate) fn decode(input: &str) -> Result<[u8; 4], HexError> {
    let mut digits = 0_usize;
    let mut value = 0_u32;
    for nibble in input.chars().filter_map(|c| c.to_digit(16)) {
        // Only the first eight digits can be a valid color; later ones just
        // push the count past every accepted length.
        if digits < 8 {
            value = (value << 4) | nibble;
        }
        digits += 1;
    }

    let [hi, upper, mid, low] = value.to_be_bytes();
    match digits {
        0 => Err(HexError::Empty),
        3 => {
            let r = (mid & 0x0F) * 17;
            let g = (low >> 4) * 17;
            let b = (low & 0x0F) * 17;
            Ok([r, g, b, 255])
        }
        6 => Ok([upper, mid, low, 255]),
        8 => Ok([upper, mid, low, hi]),
        n => Err(HexError::InvalidLength(n)),
    }
}

/// Format RGBA bytes as uppercase, zero-padded hex in the given order.
pub(crate) fn encode([r, g, b, a]: [u8; 4], layout: HexLayout) -> String {
    match layout {
        HexLayout::Rgb => format!("{r:02X}{g:02X}{b:02X}"),
        HexLayout::Rgba => format!("{r:02X}{g:02X}{b:02X}{a:02X}"),
        HexLayout::Argb => format!("{a:02X}{r:02X}{g:02X}{b:02X}"),
    }
}
