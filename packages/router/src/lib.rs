//! Store-driven navigation router for navstack.
//!
//! The application dispatches a desired route value into its store; the
//! reducer ([`reduce`]) folds it into a [`NavigationState`]; the store's
//! subscription forwards each state snapshot through a [`RouterHandle`]; and
//! the [`Router`] diffs the new route against the one currently displayed
//! and drives the chain of [`Routable`] handles through the resulting
//! operations, awaiting each transition before starting the next.
//!
//! ```rust
//! use navstack_router::{
//!     reduce, NavigationAction, NavigationState, NoOpRoutable, Route, Router,
//! };
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Screen {
//!     Tab,
//!     Detail,
//! }
//!
//! # futures_util::FutureExt::now_or_never(async {
//! let (mut router, _handle) = Router::<Screen>::new(Box::new(NoOpRoutable));
//!
//! let state = reduce(
//!     NavigationState::new(),
//!     NavigationAction::set_route(Route::from_tokens([Screen::Tab, Screen::Detail])),
//! );
//! router.transition_to(&state).await.unwrap();
//! # }).unwrap();
//! ```

mod navigation;
mod observer;
mod routable;
mod service;
mod state;

pub use navigation::{reduce, NavigationAction};
pub use observer::{RouteStateRegistry, StateObserver};
pub use routable::{NoOpRoutable, Routable, RoutingError};
pub use service::{Router, RouterHandle};
pub use state::NavigationState;

// Re-export the core model so embedders need only one dependency.
pub use navstack_core::{
    transition_actions, IdentifiedSegment, Route, RouteHash, RoutingAction, SegmentId, SegmentToken,
};
