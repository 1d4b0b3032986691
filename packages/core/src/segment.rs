use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};

/// The caller-supplied "what to show" value for a single navigation level.
///
/// Tokens are compared with the caller's own `PartialEq` implementation; the
/// router never inspects them structurally. Their `Debug` output is the
/// textual description that feeds into [`RouteHash`](crate::RouteHash). Any
/// type deriving `Clone`, `PartialEq` and `Debug` qualifies, so a plain enum
/// of screens works out of the box:
///
/// ```rust
/// #[derive(Clone, PartialEq, Debug)]
/// enum Screen {
///     Home,
///     Detail(u32),
/// }
/// ```
pub trait SegmentToken: Clone + PartialEq + Debug + 'static {}

impl<T> SegmentToken for T where T: Clone + PartialEq + Debug + 'static {}

/// A process-unique identity for one presented segment.
///
/// Two presentations of the same token are distinct segments. Ids are
/// allocated from a global monotonic counter and are never reused within a
/// process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SegmentId(u64);

impl SegmentId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A segment token paired with the identity of one concrete presentation.
///
/// Equality compares the identity only: two segments carrying token-equal
/// values are still different segments if they were created separately. This
/// is what lets a route contain the same screen twice, and what makes
/// replacing a screen with a fresh instance of itself expressible.
#[derive(Clone, Debug)]
pub struct IdentifiedSegment<T: SegmentToken> {
    token: T,
    id: SegmentId,
}

impl<T: SegmentToken> IdentifiedSegment<T> {
    /// Wrap `token` with a freshly allocated identity.
    pub fn new(token: T) -> Self {
        Self {
            token,
            id: SegmentId::next(),
        }
    }

    /// The caller-supplied token.
    pub fn token(&self) -> &T {
        &self.token
    }

    /// The identity of this presentation.
    pub fn id(&self) -> SegmentId {
        self.id
    }
}

impl<T: SegmentToken> PartialEq for IdentifiedSegment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: SegmentToken> Eq for IdentifiedSegment<T> {}

impl<T: SegmentToken> From<T> for IdentifiedSegment<T> {
    fn from(token: T) -> Self {
        Self::new(token)
    }
}
