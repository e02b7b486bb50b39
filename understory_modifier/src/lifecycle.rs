// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot lifecycle gate: run an action the first time a view appears or
//! disappears, and never again for that instance.
//!
//! ## Usage
//!
//! 1) Create one [`OnceGate`] per attached view instance, naming the event it
//!    watches and the action to run.
//! 2) Forward every lifecycle event for that instance to [`OnceGate::observe`].
//! 3) The first matching event runs the action before `observe` returns;
//!    every later one is ignored.
//!
//! A view that appears, disappears and appears again gets exactly one call.
//! A new instance needs a new gate.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use understory_modifier::lifecycle::{LifecycleEvent, OnceGate};
//!
//! let loads = Cell::new(0);
//! let mut gate = OnceGate::on_first_appear(Some(|| loads.set(loads.get() + 1)));
//!
//! assert!(gate.observe(LifecycleEvent::Appear));
//! assert!(!gate.observe(LifecycleEvent::Disappear));
//! assert!(!gate.observe(LifecycleEvent::Appear));
//! assert_eq!(loads.get(), 1);
//! ```
//!
//! `OnceGate` takes `&mut self` and assumes events for one instance arrive
//! on one thread. See [`crate::atomic::AtomicOnceGate`] for shared delivery.

use core::fmt;

/// A lifecycle notification for one view instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The instance was inserted into the rendered hierarchy.
    Appear,
    /// The instance was removed from the rendered hierarchy.
    Disappear,
}

/// Where a [`OnceGate`] is in its single transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GateState {
    /// Waiting for the first watched event.
    #[default]
    Armed,
    /// The watched event has been seen; terminal.
    Fired,
}

/// Runs an optional action on the first occurrence of one lifecycle event.
pub struct OnceGate<F = fn()> {
    watches: LifecycleEvent,
    state: GateState,
    action: Option<F>,
}

impl<F: FnOnce()> OnceGate<F> {
    /// Create an armed gate for `watches`.
    ///
    /// A `None` action is allowed; the gate still tracks the transition.
    pub fn new(watches: LifecycleEvent, action: Option<F>) -> Self {
        Self {
            watches,
            state: GateState::Armed,
            action,
        }
    }

    /// Gate that runs `action` before the view appears for the first time.
    pub fn on_first_appear(action: Option<F>) -> Self {
        Self::new(LifecycleEvent::Appear, action)
    }

    /// Gate that runs `action` after the view disappears for the first time.
    pub fn on_first_disappear(action: Option<F>) -> Self {
        Self::new(LifecycleEvent::Disappear, action)
    }

    /// Deliver one event.
    ///
    /// Returns `true` only for the delivery that moved the gate from
    /// [`GateState::Armed`] to [`GateState::Fired`]. The action has finished
    /// by the time this returns.
    pub fn observe(&mut self, event: LifecycleEvent) -> bool {
        if event != self.watches {
            return false;
        }
        match self.state {
            GateState::Fired => {
                log::trace!("once gate for {event:?} already fired; ignoring");
                false
            }
            GateState::Armed => {
                self.state = GateState::Fired;
                log::trace!("once gate for {event:?} fired");
                if let Some(action) = self.action.take() {
                    action();
                }
                true
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Returns `true` once the watched event has been observed.
    pub fn is_fired(&self) -> bool {
        self.state == GateState::Fired
    }

    /// The event this gate reacts to.
    pub fn watches(&self) -> LifecycleEvent {
        self.watches
    }
}

impl OnceGate {
    /// Gate with no action, for callers that only need the "seen it" flag.
    pub fn without_action(watches: LifecycleEvent) -> Self {
        Self::new(watches, None)
    }
}

impl<F> fmt::Debug for OnceGate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceGate")
            .field("watches", &self.watches)
            .field("state", &self.state)
            .field("has_action", &self.action.is_some())
            .finish_non_exhaustive()
    }
}
