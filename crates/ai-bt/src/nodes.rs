use ai_core::{TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus};

/// AND-gate over ordered children.
///
/// Returns the first child status that is not `Success`, or `Success` when every
/// child succeeds (including the empty case). Keeps no progress between ticks: a
/// child that returned `Running` is reached again only after all earlier children
/// succeed again on the next tick.
pub struct Sequence<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    children: Vec<Box<dyn BtNode<W, S>>>,
}

impl<W, S> Sequence<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W, S>>>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W, S> BtNode<W, S> for Sequence<W, S>
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
        for child in self.children.iter_mut() {
            match child.tick(ctx, agent, world, state) {
                BtStatus::Success => continue,
                other => return other,
            }
        }
        BtStatus::Success
    }
}

/// OR-gate / priority list over ordered children.
///
/// Returns the first child status that is not `Failure`, or `Failure` when every
/// child fails (including the empty case). Child order is the only priority signal.
pub struct Selector<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    children: Vec<Box<dyn BtNode<W, S>>>,
}

impl<W, S> Selector<W, S>
where
    W: WorldMut + 'static,
    S: 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W, S>>>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<W, S> BtNode<W, S> for Selector<W, S>
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
        for child in self.children.iter_mut() {
            match child.tick(ctx, agent, world, state) {
                BtStatus::Failure => continue,
                other => return other,
            }
        }
        BtStatus::Failure
    }
}

/// Read-only predicate leaf: `Success` when true, `Failure` otherwise. Never `Running`.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W, S> BtNode<W, S> for Condition<F>
where
    F: Fn(&TickContext, W::Agent, &W, &S) -> bool + 'static,
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
        BtStatus::from((self.cond)(ctx, agent, &*world, &*state))
    }
}

/// Inclusive distance-band leaf.
///
/// `Success` iff `min <= distance <= max`. An inverted band (`min > max`) or a
/// NaN distance can never match and always fails.
pub struct InRange<F> {
    distance: F,
    min: f32,
    max: f32,
}

impl<F> InRange<F> {
    pub fn new(distance: F, min: f32, max: f32) -> Self {
        Self { distance, min, max }
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn contains(&self, distance: f32) -> bool {
        self.min <= distance && distance <= self.max
    }
}

impl<F, W, S> BtNode<W, S> for InRange<F>
where
    F: Fn(&TickContext, W::Agent, &W, &S) -> f32 + 'static,
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
        let distance = (self.distance)(ctx, agent, &*world, &*state);
        BtStatus::from(self.contains(distance))
    }
}

/// Side-effecting leaf. The closure issues commands and picks the status.
///
/// Actions are ticked again every frame while their branch stays selected, so
/// the closure must be safe to call repeatedly.
pub struct ActionLeaf<F> {
    run: F,
}

impl<F> ActionLeaf<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F, W, S> BtNode<W, S> for ActionLeaf<F>
where
    F: FnMut(&TickContext, W::Agent, &mut W, &mut S) -> BtStatus + 'static,
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
        (self.run)(ctx, agent, world, state)
    }
}
