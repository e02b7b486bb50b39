// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit lifecycle-event subscription.
//!
//! UI runtimes usually dispatch appear/disappear notifications implicitly.
//! [`LifecycleSource`] makes that dispatch an ordinary interface so that
//! [`on_first_appear`] and [`on_first_disappear`] can be attached to any
//! runtime, and tested against [`LifecycleHub`] without one.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_modifier::hub::{on_first_appear, LifecycleHub};
//! use understory_modifier::lifecycle::LifecycleEvent;
//!
//! let fetched = Rc::new(Cell::new(0));
//! let mut hub = LifecycleHub::new();
//!
//! let counter = fetched.clone();
//! on_first_appear(&mut hub, "inbox", Some(move || counter.set(counter.get() + 1)));
//!
//! // Navigating away and back re-emits appear; the fetch happens once.
//! hub.emit(&"inbox", LifecycleEvent::Appear);
//! hub.emit(&"inbox", LifecycleEvent::Disappear);
//! hub.emit(&"inbox", LifecycleEvent::Appear);
//! assert_eq!(fetched.get(), 1);
//! ```

use alloc::boxed::Box;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::lifecycle::{LifecycleEvent, OnceGate};

/// Handle returned by [`LifecycleSource::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A callback registered for lifecycle events.
pub type LifecycleCallback = Box<dyn FnMut()>;

/// Anything that can deliver appear/disappear events for keyed instances.
pub trait LifecycleSource<K> {
    /// Register `callback` to run every time `kind` is emitted for `instance`.
    fn subscribe(
        &mut self,
        instance: K,
        kind: LifecycleEvent,
        callback: LifecycleCallback,
    ) -> SubscriptionId;
}

/// Attach a fresh [`OnceGate`] that runs `action` on the first appear event
/// for `instance`.
pub fn on_first_appear<K, S, F>(source: &mut S, instance: K, action: Option<F>) -> SubscriptionId
where
    S: LifecycleSource<K> + ?Sized,
    F: FnOnce() + 'static,
{
    attach_once(source, instance, LifecycleEvent::Appear, action)
}

/// Attach a fresh [`OnceGate`] that runs `action` on the first disappear
/// event for `instance`.
pub fn on_first_disappear<K, S, F>(
    source: &mut S,
    instance: K,
    action: Option<F>,
) -> SubscriptionId
where
    S: LifecycleSource<K> + ?Sized,
    F: FnOnce() + 'static,
{
    attach_once(source, instance, LifecycleEvent::Disappear, action)
}

fn attach_once<K, S, F>(
    source: &mut S,
    instance: K,
    kind: LifecycleEvent,
    action: Option<F>,
) -> SubscriptionId
where
    S: LifecycleSource<K> + ?Sized,
    F: FnOnce() + 'static,
{
    let mut gate = OnceGate::new(kind, action);
    source.subscribe(
        instance,
        kind,
        Box::new(move || {
            gate.observe(kind);
        }),
    )
}

struct Subscription {
    id: SubscriptionId,
    kind: LifecycleEvent,
    callback: LifecycleCallback,
}

/// In-memory [`LifecycleSource`] keyed by instance.
///
/// Callbacks for one instance and event run in subscription order. The hub
/// is single-threaded; callbacks must not call back into it.
pub struct LifecycleHub<K> {
    instances: HashMap<K, SmallVec<[Subscription; 2]>>,
    owners: HashMap<SubscriptionId, K>,
    next_id: u64,
}

impl<K: Hash + Eq + Clone> LifecycleHub<K> {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            owners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register `callback` for `kind` on `instance`.
    pub fn subscribe(
        &mut self,
        instance: K,
        kind: LifecycleEvent,
        callback: LifecycleCallback,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.owners.insert(id, instance.clone());
        self.instances
            .entry(instance)
            .or_default()
            .push(Subscription { id, kind, callback });
        id
    }

    /// Deliver `kind` to every matching subscription of `instance`.
    ///
    /// Returns how many callbacks ran.
    pub fn emit(&mut self, instance: &K, kind: LifecycleEvent) -> usize {
        let Some(subscriptions) = self.instances.get_mut(instance) else {
            return 0;
        };
        let mut ran = 0;
        for sub in subscriptions.iter_mut().filter(|sub| sub.kind == kind) {
            (sub.callback)();
            ran += 1;
        }
        ran
    }

    /// Remove one subscription. Returns `false` if `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(instance) = self.owners.remove(&id) else {
            return false;
        };
        if let Some(subscriptions) = self.instances.get_mut(&instance) {
            subscriptions.retain(|sub| sub.id != id);
            if subscriptions.is_empty() {
                self.instances.remove(&instance);
            }
        }
        true
    }

    /// Drop every subscription for `instance`, including any gates attached
    /// to it. Returns how many were removed.
    ///
    /// Attaching again afterwards starts from fresh, armed gates.
    pub fn detach(&mut self, instance: &K) -> usize {
        let Some(subscriptions) = self.instances.remove(instance) else {
            return 0;
        };
        for sub in &subscriptions {
            self.owners.remove(&sub.id);
        }
        log::debug!("detached {} lifecycle subscription(s)", subscriptions.len());
        subscriptions.len()
    }

    /// Number of live subscriptions for `instance`.
    pub fn subscription_count(&self, instance: &K) -> usize {
        self.instances.get(instance).map_or(0, SmallVec::len)
    }

    /// Returns `true` if `instance` has at least one subscription.
    pub fn is_attached(&self, instance: &K) -> bool {
        self.instances.contains_key(instance)
    }

    /// Total number of live subscriptions.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl<K: Hash + Eq + Clone> Default for LifecycleHub<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> LifecycleSource<K> for LifecycleHub<K> {
    fn subscribe(
        &mut self,
        instance: K,
        kind: LifecycleEvent,
        callback: LifecycleCallback,
    ) -> SubscriptionId {
        Self::subscribe(self, instance, kind, callback)
    }
}

impl<K> fmt::Debug for LifecycleHub<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHub")
            .field("instances", &self.instances.len())
            .field("subscriptions", &self.owners.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn emit_runs_matching_callbacks_only() {
        let (appears, on_appear) = counter();
        let (disappears, on_disappear) = counter();
        let mut hub = LifecycleHub::new();
        hub.subscribe(1_u32, LifecycleEvent::Appear, Box::new(on_appear));
        hub.subscribe(1_u32, LifecycleEvent::Disappear, Box::new(on_disappear));

        assert_eq!(hub.emit(&1, LifecycleEvent::Appear), 1);
        assert_eq!(hub.emit(&1, LifecycleEvent::Appear), 1);
        assert_eq!(hub.emit(&2, LifecycleEvent::Appear), 0);

        assert_eq!(appears.get(), 2);
        assert_eq!(disappears.get(), 0);
    }

    #[test]
    fn callbacks_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hub = LifecycleHub::new();
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            hub.subscribe((), LifecycleEvent::Appear, Box::new(move || log.borrow_mut().push(tag)));
        }

        hub.emit(&(), LifecycleEvent::Appear);

        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_removes_one_and_reports_unknown_ids() {
        let (count, cb) = counter();
        let mut hub = LifecycleHub::new();
        let id = hub.subscribe("row", LifecycleEvent::Appear, Box::new(cb));
        let (_, other) = counter();
        hub.subscribe("row", LifecycleEvent::Appear, Box::new(other));

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        assert_eq!(hub.subscription_count(&"row"), 1);

        hub.emit(&"row", LifecycleEvent::Appear);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribing_the_last_callback_detaches_the_instance() {
        let (_, cb) = counter();
        let mut hub = LifecycleHub::new();
        let id = hub.subscribe(7_u8, LifecycleEvent::Disappear, Box::new(cb));

        assert!(hub.is_attached(&7));
        hub.unsubscribe(id);
        assert!(!hub.is_attached(&7));
        assert!(hub.is_empty());
    }

    #[test]
    fn detach_drops_everything_for_the_instance() {
        let mut hub = LifecycleHub::new();
        let (_, a) = counter();
        let (_, b) = counter();
        let (_, c) = counter();
        hub.subscribe(1_u32, LifecycleEvent::Appear, Box::new(a));
        hub.subscribe(1_u32, LifecycleEvent::Disappear, Box::new(b));
        hub.subscribe(2_u32, LifecycleEvent::Appear, Box::new(c));

        assert_eq!(hub.detach(&1), 2);
        assert_eq!(hub.detach(&1), 0);
        assert_eq!(hub.len(), 1);
        assert!(hub.is_attached(&2));
    }

    #[test]
    fn first_appear_helper_fires_once() {
        let (count, cb) = counter();
        let mut hub = LifecycleHub::new();
        let mut cb = cb;
        on_first_appear(&mut hub, 0_u32, Some(move || cb()));

        for _ in 0..4 {
            hub.emit(&0, LifecycleEvent::Appear);
            hub.emit(&0, LifecycleEvent::Disappear);
        }

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn first_disappear_helper_without_action_is_silent() {
        let mut hub = LifecycleHub::new();
        on_first_disappear::<_, _, fn()>(&mut hub, 0_u32, None);

        assert_eq!(hub.emit(&0, LifecycleEvent::Disappear), 1);
        assert_eq!(hub.emit(&0, LifecycleEvent::Disappear), 1);
    }
}
