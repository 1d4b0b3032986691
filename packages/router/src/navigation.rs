//! Actions the application dispatches to drive navigation, and the reducer
//! that folds them into [`NavigationState`].

use std::any::Any;

use navstack_core::{Route, SegmentToken};

use crate::state::NavigationState;

/// An input action for the navigation reducer.
pub enum NavigationAction<T: SegmentToken> {
    /// Replace the desired route wholesale.
    SetRoute {
        route: Route<T>,
        /// Whether the resulting transition is presented animated.
        animated: bool,
    },

    /// Attach a value to the route path given by `route`.
    SetRouteState {
        route: Route<T>,
        value: Box<dyn Any + Send + Sync>,
    },
}

impl<T: SegmentToken> NavigationAction<T> {
    /// A route change with the default animated presentation.
    pub fn set_route(route: impl Into<Route<T>>) -> Self {
        Self::set_route_with_animation(route, true)
    }

    pub fn set_route_with_animation(route: impl Into<Route<T>>, animated: bool) -> Self {
        Self::SetRoute {
            route: route.into(),
            animated,
        }
    }

    pub fn set_route_state(route: impl Into<Route<T>>, value: impl Any + Send + Sync) -> Self {
        Self::SetRouteState {
            route: route.into(),
            value: Box::new(value),
        }
    }
}

/// Fold one action into the navigation state.
///
/// This is the navigation slice of the application reducer: compose it into
/// the store's root reducer and subscribe the router to the result.
pub fn reduce<T: SegmentToken>(
    mut state: NavigationState<T>,
    action: NavigationAction<T>,
) -> NavigationState<T> {
    match action {
        NavigationAction::SetRoute { route, animated } => {
            state.route = route;
            state.animated = animated;
        }
        NavigationAction::SetRouteState { route, value } => {
            state.route_state.set_boxed(&route, value);
        }
    }
    state
}
