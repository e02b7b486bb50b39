// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_color --heading-base-level=0

//! Understory Color: normalized RGBA colors with forgiving hex parsing.
//!
//! The core type is [`Color`], a small `Copy` value holding red, green, blue
//! and alpha channels as `f32` values that always lie in `0.0..=1.0`. Every
//! constructor clamps, so no code path can produce an out-of-range channel.
//!
//! Hex strings are the main interchange format. Decoding keeps only the hex
//! digits of the input (so `#`, spaces or other separators are ignored
//! wherever they appear) and then classifies by digit count:
//!
//! | digits | layout |
//! |--------|--------|
//! | 3      | `RGB`, one nibble per channel, each nibble repeated |
//! | 6      | `RRGGBB` |
//! | 8      | `AARRGGBB`, alpha first |
//!
//! Anything else decodes to [`Color::FALLBACK`] through [`Color::from_hex`],
//! or to a [`HexError`] through [`Color::try_from_hex`].
//!
//! Encoding goes the other way in three orderings, see [`HexLayout`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_color::{Color, HexLayout};
//!
//! let teal = Color::from_hex("#008080");
//! assert_eq!(teal.rgb_as_hex(), "008080");
//! assert_eq!(teal.to_hex(HexLayout::Argb), "FF008080");
//!
//! // Shorthand expands each nibble to a full byte.
//! assert_eq!(Color::from_hex("FAB"), Color::from_hex("FFAABB"));
//!
//! // The strict parser reports what went wrong.
//! assert!(Color::try_from_hex("12345").is_err());
//! ```
//!
//! ## Native colors
//!
//! Toolkits usually have their own color type. The [`ChannelSource`] trait is
//! the seam for pulling four channels out of one of those; see [`adapters`]
//! for the ones shipped with this crate.
//!
//! ## Features
//!
//! - `std` (default): build dependencies with their standard library support.
//! - `peniko`: [`ChannelSource`] and `From` conversions for `peniko::Color`.
//! - `serde`: serialize [`Color`] as a `#AARRGGBB` string.
//! - `rand`: [`Color::random`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod adapters;
mod color;
mod hex;
#[cfg(feature = "serde")]
mod serialize;
mod source;

pub use color::Color;
pub use hex::{HexError, HexLayout};
pub use source::ChannelSource;
