//! The reconciliation engine: diffs two route values into the ordered list of
//! operations that transforms one displayed stack into the other.

use crate::actions::RoutingAction;
use crate::route::Route;
use crate::segment::SegmentToken;

/// Compute the actions that transform `old` into `new`.
///
/// Pure and infallible: identical routes (by segment identity) produce an
/// empty list. The order of the returned actions is the order they must be
/// executed in.
pub fn transition_actions<T: SegmentToken>(
    old: &Route<T>,
    new: &Route<T>,
) -> Vec<RoutingAction<T>> {
    tracing::trace!("diffing route transition from {old:?} to {new:?}");

    let common = common_prefix_len(old, new);
    if common == old.len() && common == new.len() {
        return Vec::new();
    }

    let mut actions = Vec::new();

    // Tear down old segments above the divergence point, deepest first. A
    // handle cannot be removed while a descendant is still presented.
    for at in (common + 1..old.len()).rev() {
        actions.push(RoutingAction::Pop {
            at,
            segment: old[at].clone(),
        });
    }

    // The first new index not yet covered by an action.
    let mut uncovered = common;

    if common < old.len() && common < new.len() {
        // Both routes continue with different segments. The handle at the
        // divergence point is reused: its segment is replaced wholesale
        // rather than popped and re-pushed.
        actions.push(RoutingAction::Change {
            at: common,
            from: old[common].clone(),
            to: new[common].clone(),
        });
        uncovered = common + 1;
    } else if common < old.len() {
        // The new route is a strict prefix of the old one; the descending
        // run of pops continues down to the first stale segment.
        actions.push(RoutingAction::Pop {
            at: common,
            segment: old[common].clone(),
        });
    }

    // Present the remaining new segments, shallowest first. A handle must
    // exist before a descendant can be pushed onto it.
    for at in uncovered..new.len() {
        actions.push(RoutingAction::Push {
            at,
            segment: new[at].clone(),
        });
    }

    actions
}

/// The number of leading segments shared by both routes, compared by
/// identity. Token-equal segments from different presentations do not count
/// as shared.
fn common_prefix_len<T: SegmentToken>(old: &Route<T>, new: &Route<T>) -> usize {
    old.iter()
        .zip(new.iter())
        .take_while(|(old, new)| old == new)
        .count()
}
