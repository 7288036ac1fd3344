// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host lifecycle model and the composition gate built on it.
//!
//! Hosts report a fine-grained [`HostLifecycleState`] (mirroring Android's
//! `Lifecycle.State`) and move between states one [`LifecycleEvent`] at a
//! time. The glass effect only cares about two facts:
//!
//! - is the host *at least started* (visible and safe to paint)?
//! - has the host been *destroyed*?
//!
//! [`LifecycleGuard`] collapses the host state into those facts as a
//! three-state machine:
//!
//! ```text
//!            started or higher
//!   CREATED ─────────────────────► STARTED_OR_HIGHER
//!      ▲  ◄─────────────────────────────┘   │
//!      │        dropped below started       │
//!      │                                    │
//!      └──────────► DESTROYED ◄─────────────┘
//!                  (terminal)
//! ```
//!
//! Notifications that arrive after DESTROYED are ignored. During teardown
//! the host may still flush queued notifications, and that is a normal race
//! rather than an error.

/// Host lifecycle state, ordered from "gone" to "fully interactive".
///
/// The ordering matches Android's `Lifecycle.State`: `Destroyed` is the
/// lowest state and `Resumed` the highest, so
/// [`is_at_least`](Self::is_at_least) is a plain comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostLifecycleState {
    /// The owner is destroyed; no further events are dispatched.
    Destroyed,
    /// The owner is constructed but has not received `OnCreate`.
    Initialized,
    /// Created, or stopped after having been started.
    Created,
    /// Visible, or paused after having been resumed.
    Started,
    /// In the foreground and interactive.
    Resumed,
}

impl HostLifecycleState {
    /// Returns whether `self` is greater than or equal to `other`.
    #[inline]
    #[must_use]
    pub fn is_at_least(self, other: Self) -> bool {
        self >= other
    }
}

/// A single lifecycle step reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// `Initialized` → `Created`.
    OnCreate,
    /// `Created` → `Started`.
    OnStart,
    /// `Started` → `Resumed`.
    OnResume,
    /// `Resumed` → `Started`.
    OnPause,
    /// `Started` → `Created`.
    OnStop,
    /// `Created` → `Destroyed`.
    OnDestroy,
}

impl LifecycleEvent {
    /// The state the host is in after this event has been dispatched.
    #[must_use]
    pub const fn target_state(self) -> HostLifecycleState {
        match self {
            Self::OnCreate | Self::OnStop => HostLifecycleState::Created,
            Self::OnStart | Self::OnPause => HostLifecycleState::Started,
            Self::OnResume => HostLifecycleState::Resumed,
            Self::OnDestroy => HostLifecycleState::Destroyed,
        }
    }

    /// The event that moves one step up from `state`, if any.
    #[must_use]
    pub const fn up_from(state: HostLifecycleState) -> Option<Self> {
        match state {
            HostLifecycleState::Initialized => Some(Self::OnCreate),
            HostLifecycleState::Created => Some(Self::OnStart),
            HostLifecycleState::Started => Some(Self::OnResume),
            HostLifecycleState::Destroyed | HostLifecycleState::Resumed => None,
        }
    }

    /// The event that moves one step down from `state`, if any.
    #[must_use]
    pub const fn down_from(state: HostLifecycleState) -> Option<Self> {
        match state {
            HostLifecycleState::Resumed => Some(Self::OnPause),
            HostLifecycleState::Started => Some(Self::OnStop),
            HostLifecycleState::Created => Some(Self::OnDestroy),
            HostLifecycleState::Destroyed | HostLifecycleState::Initialized => None,
        }
    }
}

/// The gate state tracked per host surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Below the renderable threshold.
    #[default]
    Created,
    /// At or above "started"; composition is permitted.
    StartedOrHigher,
    /// Terminal. The surface will never render again.
    Destroyed,
}

/// Outcome of feeding one host notification into a [`LifecycleGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardTransition {
    /// The gate state did not change.
    Unchanged,
    /// The threshold was crossed upward; composition may be mounted.
    BecameRenderable,
    /// The threshold was crossed downward; composition must be unmounted.
    LostRenderable,
    /// The guard reached its terminal state; tear everything down.
    Destroyed,
    /// The notification arrived after destruction and was dropped.
    Ignored,
}

/// Per-surface composition gate.
///
/// The guard owns no rendering data. Callers consult
/// [`is_renderable`](Self::is_renderable) on every attach, and react to the
/// [`GuardTransition`] returned by [`observe`](Self::observe) while attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifecycleGuard {
    state: LifecycleState,
}

impl LifecycleGuard {
    /// Creates a guard in the [`LifecycleState::Created`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LifecycleState::Created,
        }
    }

    /// Returns the current gate state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Returns `true` iff the state is [`LifecycleState::StartedOrHigher`].
    #[inline]
    #[must_use]
    pub const fn is_renderable(&self) -> bool {
        matches!(self.state, LifecycleState::StartedOrHigher)
    }

    /// Returns `true` once the guard has reached its terminal state.
    #[inline]
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        matches!(self.state, LifecycleState::Destroyed)
    }

    /// Feeds the host's current lifecycle state into the guard.
    pub fn observe(&mut self, host: HostLifecycleState) -> GuardTransition {
        if self.is_destroyed() {
            return GuardTransition::Ignored;
        }
        let next = if host == HostLifecycleState::Destroyed {
            LifecycleState::Destroyed
        } else if host.is_at_least(HostLifecycleState::Started) {
            LifecycleState::StartedOrHigher
        } else {
            LifecycleState::Created
        };
        self.transition_to(next)
    }

    /// Moves the guard straight to its terminal state.
    ///
    /// Used when the surface itself is disposed independently of the host
    /// lifecycle.
    pub fn destroy(&mut self) -> GuardTransition {
        if self.is_destroyed() {
            return GuardTransition::Ignored;
        }
        self.transition_to(LifecycleState::Destroyed)
    }

    fn transition_to(&mut self, next: LifecycleState) -> GuardTransition {
        let prev = self.state;
        self.state = next;
        match (prev, next) {
            _ if prev == next => GuardTransition::Unchanged,
            (_, LifecycleState::Destroyed) => GuardTransition::Destroyed,
            (_, LifecycleState::StartedOrHigher) => GuardTransition::BecameRenderable,
            (LifecycleState::StartedOrHigher, LifecycleState::Created) => {
                GuardTransition::LostRenderable
            }
            _ => GuardTransition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_states_are_ordered() {
        use HostLifecycleState::*;
        assert!(Resumed.is_at_least(Started));
        assert!(Started.is_at_least(Started));
        assert!(!Created.is_at_least(Started));
        assert!(!Destroyed.is_at_least(Initialized));
    }

    #[test]
    fn events_step_one_state_at_a_time() {
        let mut state = HostLifecycleState::Initialized;
        let mut seen = alloc::vec::Vec::new();
        while let Some(event) = LifecycleEvent::up_from(state) {
            seen.push(event);
            state = event.target_state();
        }
        assert_eq!(
            seen,
            [
                LifecycleEvent::OnCreate,
                LifecycleEvent::OnStart,
                LifecycleEvent::OnResume
            ]
        );
        assert_eq!(state, HostLifecycleState::Resumed);

        seen.clear();
        while let Some(event) = LifecycleEvent::down_from(state) {
            seen.push(event);
            state = event.target_state();
        }
        assert_eq!(
            seen,
            [
                LifecycleEvent::OnPause,
                LifecycleEvent::OnStop,
                LifecycleEvent::OnDestroy
            ]
        );
        assert_eq!(state, HostLifecycleState::Destroyed);
    }

    #[test]
    fn guard_starts_below_threshold() {
        let guard = LifecycleGuard::new();
        assert_eq!(guard.state(), LifecycleState::Created);
        assert!(!guard.is_renderable());
    }

    #[test]
    fn guard_crosses_threshold_both_ways() {
        let mut guard = LifecycleGuard::new();
        assert_eq!(
            guard.observe(HostLifecycleState::Created),
            GuardTransition::Unchanged
        );
        assert_eq!(
            guard.observe(HostLifecycleState::Started),
            GuardTransition::BecameRenderable
        );
        assert!(guard.is_renderable());
        // Started -> Resumed stays above the threshold.
        assert_eq!(
            guard.observe(HostLifecycleState::Resumed),
            GuardTransition::Unchanged
        );
        assert_eq!(
            guard.observe(HostLifecycleState::Created),
            GuardTransition::LostRenderable
        );
        assert!(!guard.is_renderable());
    }

    #[test]
    fn destroyed_is_terminal_and_late_notifications_are_ignored() {
        let mut guard = LifecycleGuard::new();
        let _ = guard.observe(HostLifecycleState::Resumed);
        assert_eq!(
            guard.observe(HostLifecycleState::Destroyed),
            GuardTransition::Destroyed
        );
        assert!(guard.is_destroyed());
        assert_eq!(
            guard.observe(HostLifecycleState::Resumed),
            GuardTransition::Ignored
        );
        assert!(!guard.is_renderable(), "late events must not revive the guard");
        assert_eq!(guard.destroy(), GuardTransition::Ignored);
    }

    #[test]
    fn explicit_destroy_from_created() {
        let mut guard = LifecycleGuard::new();
        assert_eq!(guard.destroy(), GuardTransition::Destroyed);
        assert_eq!(guard.state(), LifecycleState::Destroyed);
    }
}
