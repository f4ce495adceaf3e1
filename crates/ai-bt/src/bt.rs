use ai_core::{TickContext, WorldMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_success(self) -> bool {
        matches!(self, BtStatus::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, BtStatus::Failure)
    }

    pub fn is_running(self) -> bool {
        matches!(self, BtStatus::Running)
    }
}

impl From<bool> for BtStatus {
    fn from(value: bool) -> Self {
        if value {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

/// A behavior tree node.
///
/// `W` is the host world (collaborator queries and commands), `S` the agent's own
/// state record. A node may be ticked any number of times with no setup in
/// between; it must never change the shape of the tree it belongs to.
pub trait BtNode<W, S>: 'static
where
    W: WorldMut + 'static,
    S: 'static,
{
    fn tick(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W, state: &mut S)
        -> BtStatus;
}

impl<W, S> BtNode<W, S> for Box<dyn BtNode<W, S>>
where
    W: WorldMut + 'static,
    S: 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        state: &mut S,
    ) -> BtStatus {
        (**self).tick(ctx, agent, world, state)
    }
}
