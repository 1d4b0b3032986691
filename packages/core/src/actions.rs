//! Instructions produced by the reconciliation engine on how to transform the
//! displayed navigation stack.

use crate::segment::{IdentifiedSegment, SegmentToken};

/// One structural operation against the navigation stack.
///
/// `at` is the depth of the handle responsible for carrying the operation
/// out, not the index of the resulting segment: a push of the root segment
/// happens `at` 0 and is performed by the root handle, a push of the segment
/// above it happens `at` 1 and is performed by the handle the first push
/// returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutingAction<T: SegmentToken> {
    /// Present `segment` on top of the stack.
    Push {
        at: usize,
        segment: IdentifiedSegment<T>,
    },

    /// Dismiss `segment` from the top of the stack.
    Pop {
        at: usize,
        segment: IdentifiedSegment<T>,
    },

    /// Replace `from` with `to` at the same depth, reusing the responsible
    /// handle.
    Change {
        at: usize,
        from: IdentifiedSegment<T>,
        to: IdentifiedSegment<T>,
    },
}

impl<T: SegmentToken> RoutingAction<T> {
    /// The depth of the responsible handle.
    pub fn at(&self) -> usize {
        match self {
            Self::Push { at, .. } | Self::Pop { at, .. } | Self::Change { at, .. } => *at,
        }
    }
}
