// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_modifier --heading-base-level=0

//! Understory Modifier: one-shot lifecycle hooks and view-composition helpers.
//!
//! Declarative UI code often wants "do this the first time the view shows up"
//! (load data, log an impression, start an animation) without re-running it
//! every time navigation brings the view back. This crate provides that gate
//! as a tiny state machine, plus a few helpers for wrapping opaque view nodes.
//!
//! - [`lifecycle`]: [`OnceGate`](lifecycle::OnceGate), `Armed → Fired` on the
//!   first watched appear/disappear event.
//! - [`atomic`]: [`AtomicOnceGate`](atomic::AtomicOnceGate), the same gate for
//!   hosts that deliver events from several threads.
//! - [`hub`]: the [`LifecycleSource`](hub::LifecycleSource) subscription
//!   interface, an in-memory [`LifecycleHub`](hub::LifecycleHub), and the
//!   `on_first_appear` / `on_first_disappear` attachments.
//! - [`compose`]: conditional transforms, hide/show, push-out backgrounds and
//!   square frames.
//!
//! The crate does not assume any particular UI framework. Hosts forward their
//! own lifecycle notifications and interpret the returned wrappers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_modifier::lifecycle::{GateState, LifecycleEvent, OnceGate};
//!
//! let mut impressions = 0;
//! let mut gate = OnceGate::on_first_appear(Some(|| impressions += 1));
//!
//! gate.observe(LifecycleEvent::Appear);
//! gate.observe(LifecycleEvent::Disappear);
//! gate.observe(LifecycleEvent::Appear);
//! assert_eq!(gate.state(), GateState::Fired);
//! drop(gate);
//! assert_eq!(impressions, 1);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod atomic;
pub mod compose;
pub mod hub;
pub mod lifecycle;
