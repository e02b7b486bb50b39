// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters for color types from other crates.
//!
//! Modules in this file are behind feature flags so `understory_color` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`peniko`] (`peniko` feature): read [`peniko::Color`] through
//!   [`crate::ChannelSource`] and convert in both directions.

#[cfg(feature = "peniko")]
pub mod peniko;
