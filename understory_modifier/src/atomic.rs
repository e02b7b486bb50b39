// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thread-safe variant of [`OnceGate`](crate::lifecycle::OnceGate).
//!
//! Hosts that deliver lifecycle events from more than one thread share an
//! [`AtomicOnceGate`] by reference. The `Armed → Fired` step is a single
//! compare-and-swap, so exactly one delivering thread runs the action no
//! matter how the deliveries interleave.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::lifecycle::{GateState, LifecycleEvent};

/// Runs an optional action on the first occurrence of one lifecycle event,
/// callable through `&self`.
pub struct AtomicOnceGate<F = fn()> {
    watches: LifecycleEvent,
    fired: AtomicBool,
    action: Option<F>,
}

impl<F: Fn()> AtomicOnceGate<F> {
    /// Create an armed gate for `watches`.
    pub fn new(watches: LifecycleEvent, action: Option<F>) -> Self {
        Self {
            watches,
            fired: AtomicBool::new(false),
            action,
        }
    }

    /// Gate that runs `action` on the first appear event.
    pub fn on_first_appear(action: Option<F>) -> Self {
        Self::new(LifecycleEvent::Appear, action)
    }

    /// Gate that runs `action` on the first disappear event.
    pub fn on_first_disappear(action: Option<F>) -> Self {
        Self::new(LifecycleEvent::Disappear, action)
    }

    /// Deliver one event, possibly concurrently with other deliveries.
    ///
    /// Returns `true` on the one call that won the transition; that call has
    /// run the action before returning.
    pub fn observe(&self, event: LifecycleEvent) -> bool {
        if event != self.watches {
            return false;
        }
        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        log::trace!("atomic once gate for {event:?} fired");
        if let Some(action) = &self.action {
            action();
        }
        true
    }

    /// Current state.
    pub fn state(&self) -> GateState {
        if self.is_fired() {
            GateState::Fired
        } else {
            GateState::Armed
        }
    }

    /// Returns `true` once some delivery has won the transition.
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// The event this gate reacts to.
    pub fn watches(&self) -> LifecycleEvent {
        self.watches
    }
}

impl<F> fmt::Debug for AtomicOnceGate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicOnceGate")
            .field("watches", &self.watches)
            .field("fired", &self.fired.load(Ordering::Relaxed))
            .field("has_action", &self.action.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    #[test]
    fn fires_once_through_shared_reference() {
        let calls = AtomicUsize::new(0);
        let gate = AtomicOnceGate::on_first_disappear(Some(|| {
            calls.fetch_add(1, Ordering::Relaxed);
        }));
        let shared = &gate;

        assert!(!shared.observe(LifecycleEvent::Appear));
        assert!(shared.observe(LifecycleEvent::Disappear));
        assert!(!shared.observe(LifecycleEvent::Disappear));

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(gate.state(), GateState::Fired);
    }

    #[test]
    fn no_action_is_fine() {
        let gate = AtomicOnceGate::<fn()>::on_first_appear(None);
        assert_eq!(gate.state(), GateState::Armed);
        assert!(gate.observe(LifecycleEvent::Appear));
        assert!(gate.is_fired());
    }
}
