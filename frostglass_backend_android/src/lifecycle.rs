// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host lifecycle producer with scoped subscriptions.
//!
//! [`LifecycleRegistry`] plays the part of an Android `LifecycleOwner`: it
//! holds the host's current [`HostLifecycleState`] and notifies observers as
//! it moves, one [`LifecycleEvent`] per step. Observers are registered with
//! [`add_observer`](LifecycleRegistry::add_observer), which returns a
//! [`LifecycleSubscription`]. Dropping the subscription removes the observer,
//! so a surface's observer lives exactly as long as the surface's session.
//!
//! Dispatch iterates over a snapshot of the observer list. An observer may
//! drop its own (or another) subscription while being notified; observers
//! removed mid-dispatch are skipped for the rest of that step.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use frostglass_core::lifecycle::{HostLifecycleState, LifecycleEvent};

/// Identifies one registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<RefCell<dyn FnMut(HostLifecycleState)>>;

struct RegistryInner {
    state: Cell<HostLifecycleState>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
}

impl RegistryInner {
    fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.borrow().iter().any(|(other, _)| *other == id)
    }

    fn dispatch(&self, state: HostLifecycleState) {
        let snapshot: Vec<(ObserverId, Observer)> = self
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();
        for (id, observer) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            // An observer that is already running is being re-entered from
            // its own callback and skips this step; it can read
            // `current_state` when it returns.
            if let Ok(mut callback) = observer.try_borrow_mut() {
                callback(state);
            }
        }
    }
}

/// The host's lifecycle owner.
///
/// Cloning yields another handle to the same lifecycle.
#[derive(Clone)]
pub struct LifecycleRegistry {
    inner: Rc<RegistryInner>,
}

impl LifecycleRegistry {
    /// Creates a lifecycle in [`HostLifecycleState::Initialized`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                state: Cell::new(HostLifecycleState::Initialized),
                next_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Returns the current host state.
    #[must_use]
    pub fn current_state(&self) -> HostLifecycleState {
        self.inner.state.get()
    }

    /// Applies a host event, stepping through intermediate states.
    ///
    /// Returns the events actually dispatched.
    pub fn handle_event(&self, event: LifecycleEvent) -> Vec<LifecycleEvent> {
        self.move_to(event.target_state())
    }

    /// Moves the host to `target` one event at a time.
    ///
    /// `Created → Resumed` dispatches `OnStart` then `OnResume`. A destroyed
    /// lifecycle never moves again, and nothing moves back to `Initialized`;
    /// both requests are ignored and return no events.
    pub fn move_to(&self, target: HostLifecycleState) -> Vec<LifecycleEvent> {
        let mut dispatched = Vec::new();
        let mut state = self.current_state();
        if state == HostLifecycleState::Destroyed
            || (target == HostLifecycleState::Initialized && state != target)
        {
            return dispatched;
        }
        while state != target {
            let step = if target > state {
                LifecycleEvent::up_from(state)
            } else if state == HostLifecycleState::Initialized {
                // Never created: go straight to destroyed.
                Some(LifecycleEvent::OnDestroy)
            } else {
                LifecycleEvent::down_from(state)
            };
            let Some(event) = step else {
                break;
            };
            state = event.target_state();
            self.inner.state.set(state);
            dispatched.push(event);
            self.inner.dispatch(state);
        }
        dispatched
    }

    /// Registers an observer for future state changes.
    ///
    /// The callback is not invoked for the current state; read
    /// [`current_state`](Self::current_state) to catch up. The observer stays
    /// registered until the returned subscription is dropped.
    #[must_use = "dropping the subscription removes the observer"]
    pub fn add_observer(
        &self,
        callback: impl FnMut(HostLifecycleState) + 'static,
    ) -> LifecycleSubscription {
        let id = ObserverId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let observer: Observer = Rc::new(RefCell::new(callback));
        self.inner.observers.borrow_mut().push((id, observer));
        LifecycleSubscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

impl Default for LifecycleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LifecycleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleRegistry")
            .field("state", &self.current_state())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Keeps one observer registered; removes it on drop.
pub struct LifecycleSubscription {
    registry: Weak<RegistryInner>,
    id: ObserverId,
}

impl LifecycleSubscription {
    /// Returns the observer this subscription owns.
    #[must_use]
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Returns `true` while the lifecycle is alive and the observer is
    /// registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|inner| inner.is_registered(self.id))
    }
}

impl Drop for LifecycleSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner
                .observers
                .borrow_mut()
                .retain(|(other, _)| *other != self.id);
        }
    }
}

impl fmt::Debug for LifecycleSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleSubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HostLifecycleState::*;

    fn recorder(
        registry: &LifecycleRegistry,
    ) -> (Rc<RefCell<Vec<HostLifecycleState>>>, LifecycleSubscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = registry.add_observer(move |state| sink.borrow_mut().push(state));
        (seen, sub)
    }

    #[test]
    fn starts_initialized() {
        let registry = LifecycleRegistry::new();
        assert_eq!(registry.current_state(), Initialized);
        assert_eq!(registry.observer_count(), 0);
    }

    #[test]
    fn move_to_steps_through_intermediate_states() {
        let registry = LifecycleRegistry::new();
        let (seen, _sub) = recorder(&registry);
        let events = registry.move_to(Resumed);
        assert_eq!(
            events,
            [
                LifecycleEvent::OnCreate,
                LifecycleEvent::OnStart,
                LifecycleEvent::OnResume
            ]
        );
        assert_eq!(*seen.borrow(), [Created, Started, Resumed]);

        seen.borrow_mut().clear();
        let events = registry.handle_event(LifecycleEvent::OnStop);
        assert_eq!(events, [LifecycleEvent::OnPause, LifecycleEvent::OnStop]);
        assert_eq!(*seen.borrow(), [Started, Created]);
    }

    #[test]
    fn destroyed_is_final() {
        let registry = LifecycleRegistry::new();
        let _ = registry.move_to(Resumed);
        let (seen, _sub) = recorder(&registry);
        let events = registry.handle_event(LifecycleEvent::OnDestroy);
        assert_eq!(events.last(), Some(&LifecycleEvent::OnDestroy));
        assert_eq!(seen.borrow().last(), Some(&Destroyed));

        seen.borrow_mut().clear();
        assert!(registry.move_to(Resumed).is_empty());
        assert!(seen.borrow().is_empty());
        assert_eq!(registry.current_state(), Destroyed);
    }

    #[test]
    fn never_created_goes_straight_to_destroyed() {
        let registry = LifecycleRegistry::new();
        let (seen, _sub) = recorder(&registry);
        assert_eq!(registry.move_to(Destroyed), [LifecycleEvent::OnDestroy]);
        assert_eq!(*seen.borrow(), [Destroyed]);
    }

    #[test]
    fn cannot_return_to_initialized() {
        let registry = LifecycleRegistry::new();
        let _ = registry.move_to(Created);
        assert!(registry.move_to(Initialized).is_empty());
        assert_eq!(registry.current_state(), Created);
    }

    #[test]
    fn new_observer_only_sees_later_changes() {
        let registry = LifecycleRegistry::new();
        let _ = registry.move_to(Started);
        let (seen, _sub) = recorder(&registry);
        assert!(seen.borrow().is_empty());
        assert_eq!(registry.current_state(), Started);
        let _ = registry.move_to(Resumed);
        assert_eq!(*seen.borrow(), [Resumed]);
    }

    #[test]
    fn dropping_subscription_removes_observer() {
        let registry = LifecycleRegistry::new();
        let (seen, sub) = recorder(&registry);
        assert!(sub.is_active());
        assert_eq!(registry.observer_count(), 1);
        drop(sub);
        assert_eq!(registry.observer_count(), 0);
        let _ = registry.move_to(Created);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = LifecycleRegistry::new();
        let (_seen, sub) = recorder(&registry);
        drop(registry);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn observer_may_unsubscribe_during_dispatch() {
        let registry = LifecycleRegistry::new();
        let slot: Rc<RefCell<Option<LifecycleSubscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own = Rc::clone(&slot);
        let count = Rc::clone(&calls);
        let sub = registry.add_observer(move |_| {
            count.set(count.get() + 1);
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        let _ = registry.move_to(Resumed);
        assert_eq!(calls.get(), 1, "removed after the first step");
        assert_eq!(registry.observer_count(), 0);
    }

    #[test]
    fn observer_removed_by_earlier_observer_is_skipped() {
        let registry = LifecycleRegistry::new();
        let victim_slot: Rc<RefCell<Option<LifecycleSubscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim_slot);
        let _killer = registry.add_observer(move |_| {
            slot.borrow_mut().take();
        });
        let (seen, victim) = recorder(&registry);
        *victim_slot.borrow_mut() = Some(victim);

        let _ = registry.move_to(Created);
        assert!(seen.borrow().is_empty(), "victim was removed before its turn");
    }
}
