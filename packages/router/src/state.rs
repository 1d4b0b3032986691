use navstack_core::{Route, SegmentToken};

use crate::observer::{RouteStateRegistry, StateObserver};

/// The navigation sub-state of the application state tree.
///
/// The router treats this as input: the external state container owns it,
/// the [reducer](crate::reduce) folds dispatched actions into it, and every
/// store notification delivers a fresh snapshot to the router.
#[derive(Clone, Debug)]
pub struct NavigationState<T: SegmentToken> {
    /// The desired route.
    pub route: Route<T>,

    /// State attached to route paths, keyed by route-prefix hash.
    pub route_state: RouteStateRegistry,

    /// Whether the next transition is presented animated.
    pub animated: bool,
}

impl<T: SegmentToken> NavigationState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The observer attached to `route`, if any.
    pub fn state_observer(&self, route: &Route<T>) -> Option<StateObserver> {
        self.route_state.get(route)
    }
}

impl<T: SegmentToken> Default for NavigationState<T> {
    fn default() -> Self {
        Self {
            route: Route::new(),
            route_state: RouteStateRegistry::new(),
            animated: true,
        }
    }
}
