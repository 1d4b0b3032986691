//! Core route model and reconciliation engine for navstack.
//!
//! A navigation stack is described declaratively by a [`Route`]: an ordered
//! sequence of [`IdentifiedSegment`]s, each pairing a caller-supplied
//! [`SegmentToken`] ("what to show") with a process-unique identity ("this
//! particular presentation of it"). Much like a virtual DOM reconciler turns
//! a new tree into minimal DOM edits, [`transition_actions`] turns an old and
//! a new route into the minimal ordered list of [`RoutingAction`]s (push,
//! pop, or change at a depth) that transforms the displayed stack into the
//! desired one.
//!
//! This crate is the pure half of navstack: no I/O, no executor, no handles.
//! The `navstack-router` crate owns the live navigation handles and drives
//! them through the actions computed here.

mod actions;
mod diff;
mod route;
mod segment;

pub use actions::RoutingAction;
pub use diff::transition_actions;
pub use route::{Route, RouteHash};
pub use segment::{IdentifiedSegment, SegmentId, SegmentToken};
