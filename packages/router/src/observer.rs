//! Observable state scoped to a route path rather than to a screen instance.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, RwLock};

use navstack_core::{Route, RouteHash, SegmentToken};
use rustc_hash::FxHashMap;

type SharedValue = Arc<RwLock<Box<dyn Any + Send + Sync>>>;
type Subscribers = Arc<RwLock<Vec<Box<dyn Fn() + Send + Sync>>>>;

/// An opaque observable container holding the state attached to one route
/// path.
///
/// The payload is type-erased; consumers read it back with the type they
/// expect. Writes go through the shared container, so every holder of a
/// clone observes them, and subscribers registered with
/// [`subscribe`](StateObserver::subscribe) are notified after each write.
#[derive(Clone)]
pub struct StateObserver {
    value: SharedValue,
    subscribers: Subscribers,
}

impl StateObserver {
    pub fn new(value: impl Any + Send + Sync) -> Self {
        Self::from_boxed(Box::new(value))
    }

    pub(crate) fn from_boxed(value: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Read the current payload as a `V`, if that is what it holds.
    pub fn value<V: Clone + 'static>(&self) -> Option<V> {
        self.value.read().unwrap().downcast_ref::<V>().cloned()
    }

    /// Replace the payload and notify subscribers.
    pub fn write(&self, value: impl Any + Send + Sync) {
        self.write_boxed(Box::new(value));
    }

    pub(crate) fn write_boxed(&self, value: Box<dyn Any + Send + Sync>) {
        *self.value.write().unwrap() = value;
        // subscriber list is locked while notifying: callbacks must not
        // subscribe or write from within
        for subscriber in self.subscribers.read().unwrap().iter() {
            subscriber();
        }
    }

    /// Register a callback invoked after every write.
    pub fn subscribe(&self, subscriber: impl Fn() + Send + Sync + 'static) {
        self.subscribers.write().unwrap().push(Box::new(subscriber));
    }
}

impl fmt::Debug for StateObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateObserver")
    }
}

/// Route-scoped state, keyed by the [`RouteHash`] of a full route prefix.
///
/// Entries are created and written by the reducer in response to dispatched
/// actions; the router only reads. Nothing is ever removed implicitly: the
/// lifecycle of an entry belongs to the state layer that created it.
#[derive(Clone, Default, Debug)]
pub struct RouteStateRegistry {
    observers: FxHashMap<RouteHash, StateObserver>,
}

impl RouteStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the observer attached to `route`, by hash.
    pub fn get<T: SegmentToken>(&self, route: &Route<T>) -> Option<StateObserver> {
        self.observers.get(&RouteHash::of(route)).cloned()
    }

    /// Attach `value` to `route`, writing through an existing observer so
    /// that handles already holding it see the update.
    pub fn set<T: SegmentToken>(&mut self, route: &Route<T>, value: impl Any + Send + Sync) {
        self.set_boxed(route, Box::new(value));
    }

    pub(crate) fn set_boxed<T: SegmentToken>(
        &mut self,
        route: &Route<T>,
        value: Box<dyn Any + Send + Sync>,
    ) {
        let hash = RouteHash::of(route);
        match self.observers.get(&hash) {
            Some(observer) => observer.write_boxed(value),
            None => {
                self.observers.insert(hash, StateObserver::from_boxed(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Screen {
        Part1,
        Part2,
    }

    #[test]
    fn reads_back_the_value_it_was_set_to() {
        let mut registry = RouteStateRegistry::new();
        let route = Route::from_tokens([Screen::Part1, Screen::Part1]);

        registry.set(&route, String::from("UserID_10"));

        let observer = registry.get(&route).unwrap();
        assert_eq!(observer.value::<String>(), Some(String::from("UserID_10")));
        assert_eq!(observer.value::<u32>(), None);
    }

    #[test]
    fn unrelated_routes_have_no_state() {
        let mut registry = RouteStateRegistry::new();
        let route = Route::from_tokens([Screen::Part1]);
        let unrelated = Route::from_tokens([Screen::Part2]);

        registry.set(&route, String::from("UserID_10"));

        assert!(registry.get(&unrelated).is_none());
    }

    #[test]
    fn setting_twice_writes_through_the_existing_observer() {
        let mut registry = RouteStateRegistry::new();
        let route = Route::from_tokens([Screen::Part1]);

        registry.set(&route, String::from("first"));
        let observer = registry.get(&route).unwrap();

        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        observer.subscribe(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        registry.set(&route, String::from("second"));

        // the handle that fetched the observer earlier sees the new value
        assert_eq!(observer.value::<String>(), Some(String::from("second")));
        assert_eq!(notified.load(Ordering::Relaxed), 1);
    }
}
