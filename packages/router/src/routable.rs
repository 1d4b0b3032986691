use async_trait::async_trait;
use navstack_core::{IdentifiedSegment, SegmentToken};
use thiserror::Error;

use crate::observer::StateObserver;

/// Errors surfaced while driving navigation handles.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum RoutingError {
    /// A handle was asked to perform an operation it does not implement.
    ///
    /// The dispatched route demanded a structural change the presenting
    /// screen cannot express. This is a configuration error, not a runtime
    /// condition: the router stops and surfaces it instead of retrying.
    #[error("this routable cannot {operation} segments; the operation is not implemented")]
    Unsupported { operation: &'static str },

    /// An action addressed a depth with no live handle.
    #[error("no routable is responsible for depth {depth}")]
    MissingRoutable { depth: usize },
}

/// A host navigation controller that can present and dismiss segments.
///
/// [`push_segment`](Routable::push_segment) and
/// [`change_segment`](Routable::change_segment) return the handle responsible
/// for the next deeper level of the stack. Every operation is async: its
/// future must resolve exactly once, after the corresponding UI transition
/// has finished, animated or not. The router awaits it before issuing the
/// next operation, so implementations control the pacing of the whole
/// transition sequence.
///
/// All three operations default to [`RoutingError::Unsupported`]; a handle
/// implements only the subset its screen supports.
#[async_trait(?Send)]
pub trait Routable<T: SegmentToken> {
    /// Present `segment` on this handle.
    async fn push_segment(
        &mut self,
        _segment: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<Box<dyn Routable<T>>, RoutingError> {
        Err(RoutingError::Unsupported { operation: "push" })
    }

    /// Dismiss `segment`, the segment this handle currently presents.
    async fn pop_segment(
        &mut self,
        _segment: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<(), RoutingError> {
        Err(RoutingError::Unsupported { operation: "pop" })
    }

    /// Replace the presented segment `from` with `to`.
    async fn change_segment(
        &mut self,
        _from: &IdentifiedSegment<T>,
        _to: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<Box<dyn Routable<T>>, RoutingError> {
        Err(RoutingError::Unsupported { operation: "change" })
    }
}

/// A [`Routable`] that accepts every operation without presenting anything.
///
/// Useful for screens with no navigation behavior of their own, and for
/// driving the router headless in tests.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoOpRoutable;

#[async_trait(?Send)]
impl<T: SegmentToken> Routable<T> for NoOpRoutable {
    async fn push_segment(
        &mut self,
        _segment: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<Box<dyn Routable<T>>, RoutingError> {
        Ok(Box::new(NoOpRoutable))
    }

    async fn pop_segment(
        &mut self,
        _segment: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<(), RoutingError> {
        Ok(())
    }

    async fn change_segment(
        &mut self,
        _from: &IdentifiedSegment<T>,
        _to: &IdentifiedSegment<T>,
        _state: Option<StateObserver>,
        _animated: bool,
    ) -> Result<Box<dyn Routable<T>>, RoutingError> {
        Ok(Box::new(NoOpRoutable))
    }
}
