use ai_core::{TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus};

/// Owns the root node and exposes the per-tick entry point.
pub struct BehaviorTree<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    root: Option<Box<dyn BtNode<W, S>>>,
    last: Option<BtStatus>,
}

impl<W, S> BehaviorTree<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    pub fn new(root: Box<dyn BtNode<W, S>>) -> Self {
        Self {
            root: Some(root),
            last: None,
        }
    }

    /// A tree with no root. Evaluates to `Failure` until a root is set.
    pub fn empty() -> Self {
        Self {
            root: None,
            last: None,
        }
    }

    pub fn set_root(&mut self, root: Box<dyn BtNode<W, S>>) {
        self.root = Some(root);
    }

    pub fn clear_root(&mut self) -> Option<Box<dyn BtNode<W, S>>> {
        self.root.take()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// Status returned by the most recent [`evaluate`](Self::evaluate), if any.
    pub fn last_status(&self) -> Option<BtStatus> {
        self.last
    }

    /// Evaluate the tree once.
    ///
    /// A missing root is not an error: the agent simply has nothing to do and
    /// the tree reports `Failure`.
    pub fn evaluate(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        state: &mut S,
    ) -> BtStatus {
        let status = match self.root.as_mut() {
            Some(root) => root.tick(ctx, agent, world, state),
            None => {
                tracing::trace!(tick = ctx.tick, ?agent, "behavior tree has no root");
                BtStatus::Failure
            }
        };
        self.last = Some(status);
        status
    }
}

impl<W, S> Default for BehaviorTree<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}
