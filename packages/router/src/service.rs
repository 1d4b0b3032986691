//! The router service: owns the live handle chain and drives it through the
//! actions computed by the reconciliation engine, one at a time.

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use navstack_core::{transition_actions, Route, RouteHash, RoutingAction, SegmentToken};

use crate::routable::{Routable, RoutingError};
use crate::state::NavigationState;

/// Feeds navigation-state snapshots into a running [`Router`].
///
/// This is the subscription surface: register it with the state container so
/// that every store notification forwards the navigation sub-state here.
/// Sending never blocks; snapshots queue up and the router applies them
/// strictly in order.
pub struct RouterHandle<T: SegmentToken> {
    tx: UnboundedSender<NavigationState<T>>,
}

impl<T: SegmentToken> Clone for RouterHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: SegmentToken> RouterHandle<T> {
    /// Deliver the latest navigation state.
    pub fn new_state(&self, state: NavigationState<T>) {
        self.tx.unbounded_send(state).ok();
    }
}

/// The transition executor.
///
/// Holds the route currently displayed, the root handle supplied at
/// construction, and the chain of live handles produced by pushes and
/// changes, where `chain[i]` presents the segment at depth `i`. Each new
/// route value is diffed against the displayed one and the resulting actions
/// are executed sequentially, awaiting every handle operation before issuing
/// the next.
pub struct Router<T: SegmentToken> {
    current: Route<T>,
    root: Box<dyn Routable<T>>,
    chain: Vec<Box<dyn Routable<T>>>,
    rx: UnboundedReceiver<NavigationState<T>>,
}

impl<T: SegmentToken> Router<T> {
    /// Create a router around the root handle, linked with the
    /// [`RouterHandle`] used to feed it state.
    ///
    /// Construction performs no handle operation; nothing happens until the
    /// first route is dispatched.
    pub fn new(root: Box<dyn Routable<T>>) -> (Self, RouterHandle<T>) {
        let (tx, rx) = unbounded();

        (
            Self {
                current: Route::new(),
                root,
                chain: Vec::new(),
                rx,
            },
            RouterHandle { tx },
        )
    }

    /// The route the router has last fully committed.
    pub fn current_route(&self) -> &Route<T> {
        &self.current
    }

    /// The router's event loop.
    ///
    /// Applies queued snapshots one at a time until every [`RouterHandle`]
    /// is dropped. A snapshot arriving while a transition is in flight waits
    /// its turn and is then diffed against the route that transition
    /// committed. A configuration error aborts the loop immediately.
    pub async fn run(mut self) -> Result<(), RoutingError> {
        while let Some(state) = self.rx.next().await {
            if let Err(err) = self.transition_to(&state).await {
                tracing::error!("navigation stopped: {err}");
                return Err(err);
            }
        }

        Ok(())
    }

    /// Reconcile the displayed stack against `state.route`.
    ///
    /// Resolves once the last action's transition has finished; the new
    /// route is committed as current only then. A route hash-equal to the
    /// current one is a no-op.
    pub async fn transition_to(&mut self, state: &NavigationState<T>) -> Result<(), RoutingError> {
        if RouteHash::of(&state.route) == RouteHash::of(&self.current) {
            return Ok(());
        }

        let actions = transition_actions(&self.current, &state.route);
        tracing::debug!(
            "transitioning from {:?} to {:?} in {} actions",
            self.current,
            state.route,
            actions.len()
        );

        for action in actions {
            self.apply(action, state).await?;
        }

        self.current = state.route.clone();
        tracing::debug!("committed route {:?}", self.current);

        Ok(())
    }

    async fn apply(
        &mut self,
        action: RoutingAction<T>,
        state: &NavigationState<T>,
    ) -> Result<(), RoutingError> {
        tracing::trace!("applying {action:?}");
        let animated = state.animated;

        match action {
            RoutingAction::Push { at, segment } => {
                let observer = state.state_observer(&state.route.prefix(at + 1));
                let child = self
                    .responsible(at)?
                    .push_segment(&segment, observer, animated)
                    .await?;
                self.chain.truncate(at);
                self.chain.push(child);
            }
            RoutingAction::Pop { at, segment } => {
                // The popped segment belongs to the stack being torn down,
                // so its state is keyed by the displayed route's prefix.
                let observer = state.state_observer(&self.current.prefix(at + 1));
                self.responsible(at)?
                    .pop_segment(&segment, observer, animated)
                    .await?;
                self.chain.truncate(at);
            }
            RoutingAction::Change { at, from, to } => {
                let observer = state.state_observer(&state.route.prefix(at + 1));
                let child = self
                    .responsible(at)?
                    .change_segment(&from, &to, observer, animated)
                    .await?;
                self.chain.truncate(at);
                self.chain.push(child);
            }
        }

        Ok(())
    }

    /// The live handle responsible for operations at `depth`: the root for
    /// depth 0, the handle presenting the segment at `depth - 1` otherwise.
    fn responsible(&mut self, depth: usize) -> Result<&mut (dyn Routable<T> + '_), RoutingError> {
        match depth {
            0 => Ok(self.root.as_mut()),
            _ => match self.chain.get_mut(depth - 1) {
                Some(routable) => Ok(routable.as_mut()),
                None => Err(RoutingError::MissingRoutable { depth }),
            },
        }
    }
}
