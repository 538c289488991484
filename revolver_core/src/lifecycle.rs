// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! App lifecycle notifications.
//!
//! [`LifecycleCenter`] is a shared, single-threaded notification hub. The host
//! posts [`LifecycleEvent`]s into it; listeners registered with
//! [`subscribe`](LifecycleCenter::subscribe) receive them. A subscription is
//! an RAII [`Subscription`] guard: dropping it unregisters the listener, so a
//! component that owns its subscriptions releases them when it is destroyed.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// App lifecycle transitions relevant to auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The app is about to be suspended (backgrounded, interrupted).
    WillResignActive,
    /// The app became active again.
    DidBecomeActive,
}

/// Receives [`LifecycleEvent`]s from a [`LifecycleCenter`].
pub trait LifecycleListener {
    /// Called for every event posted while subscribed.
    fn on_lifecycle(&mut self, event: LifecycleEvent);
}

/// Weak handle through which a [`LifecycleCenter`] reaches a listener.
pub type ListenerRef = Weak<RefCell<dyn LifecycleListener>>;

#[derive(Default)]
struct CenterInner {
    next_id: u64,
    listeners: Vec<(u64, ListenerRef)>,
}

/// Shared hub that fans lifecycle events out to listeners.
///
/// Cloning produces another handle to the same hub.
#[derive(Clone, Default)]
pub struct LifecycleCenter {
    inner: Rc<RefCell<CenterInner>>,
}

impl LifecycleCenter {
    /// Creates a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned guard is dropped.
    ///
    /// The hub holds the listener weakly; a listener that has been dropped
    /// without unsubscribing is skipped and pruned on the next post.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: ListenerRef) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        Subscription {
            id,
            center: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every live listener and returns how many
    /// received it.
    ///
    /// Listeners are snapshotted before dispatch, so a listener may
    /// subscribe or unsubscribe from inside its callback.
    pub fn post(&self, event: LifecycleEvent) -> usize {
        let targets: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            inner.listeners.retain(|(_, l)| l.strong_count() > 0);
            inner
                .listeners
                .iter()
                .filter_map(|(_, l)| l.upgrade())
                .collect()
        };
        for listener in &targets {
            listener.borrow_mut().on_lifecycle(event);
        }
        targets.len()
    }

    /// Returns the number of registered listeners, including any that have
    /// been dropped but not yet pruned.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for LifecycleCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleCenter")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// Keeps a listener registered with a [`LifecycleCenter`].
///
/// Dropping the guard unregisters the listener. Outliving the hub is fine.
pub struct Subscription {
    id: u64,
    center: Weak<RefCell<CenterInner>>,
}

impl Subscription {
    /// Returns `true` while the hub this subscription belongs to is alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.center.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // A hub that is mid-post keeps the entry; it is pruned once the
        // listener itself is gone.
        if let Some(center) = self.center.upgrade()
            && let Ok(mut inner) = center.try_borrow_mut()
        {
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[derive(Default)]
    struct Log(Vec<LifecycleEvent>);

    impl LifecycleListener for Log {
        fn on_lifecycle(&mut self, event: LifecycleEvent) {
            self.0.push(event);
        }
    }

    #[test]
    fn posted_events_reach_subscribers() {
        let center = LifecycleCenter::new();
        let log = Rc::new(RefCell::new(Log::default()));
        let weak: ListenerRef = Rc::downgrade(&log) as ListenerRef;
        let _sub = center.subscribe(weak);

        assert_eq!(center.post(LifecycleEvent::WillResignActive), 1);
        assert_eq!(center.post(LifecycleEvent::DidBecomeActive), 1);
        assert_eq!(
            log.borrow().0,
            vec![LifecycleEvent::WillResignActive, LifecycleEvent::DidBecomeActive]
        );
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let center = LifecycleCenter::new();
        let log = Rc::new(RefCell::new(Log::default()));
        let sub = center.subscribe(Rc::downgrade(&log) as ListenerRef);
        assert_eq!(center.listener_count(), 1);

        drop(sub);
        assert_eq!(center.listener_count(), 0);
        assert_eq!(center.post(LifecycleEvent::WillResignActive), 0);
        assert!(log.borrow().0.is_empty(), "no events after unsubscribe");
    }

    #[test]
    fn dead_listeners_are_pruned() {
        let center = LifecycleCenter::new();
        let log = Rc::new(RefCell::new(Log::default()));
        let _sub = center.subscribe(Rc::downgrade(&log) as ListenerRef);

        drop(log);
        assert_eq!(center.post(LifecycleEvent::DidBecomeActive), 0);
        assert_eq!(center.listener_count(), 0);
    }

    #[test]
    fn subscription_outlives_center() {
        let center = LifecycleCenter::new();
        let log = Rc::new(RefCell::new(Log::default()));
        let sub = center.subscribe(Rc::downgrade(&log) as ListenerRef);

        drop(center);
        assert!(!sub.is_connected());
        drop(sub);
    }
}
