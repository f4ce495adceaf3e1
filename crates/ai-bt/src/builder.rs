//! Shorthands for building trees.
//!
//! Each helper boxes the node so children can be listed directly:
//! `selector(vec![sequence(vec![condition(..), action(..)]), action(..)])`.
//! The closure bounds are spelled out here so closure arguments get their
//! signatures inferred at the call site.

use ai_core::{TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus};
use crate::nodes::{ActionLeaf, Condition, InRange, Selector, Sequence};

pub fn sequence<W, S>(children: Vec<Box<dyn BtNode<W, S>>>) -> Box<dyn BtNode<W, S>>
where
    W: WorldMut + 'static,
    S: 'static,
{
    Box::new(Sequence::new(children))
}

pub fn selector<W, S>(children: Vec<Box<dyn BtNode<W, S>>>) -> Box<dyn BtNode<W, S>>
where
    W: WorldMut + 'static,
    S: 'static,
{
    Box::new(Selector::new(children))
}

pub fn condition<W, S, F>(cond: F) -> Box<dyn BtNode<W, S>>
where
    F: Fn(&TickContext, W::Agent, &W, &S) -> bool + 'static,
    W: WorldMut + 'static,
    S: 'static,
{
    Box::new(Condition::new(cond))
}

pub fn in_range<W, S, F>(distance: F, min: f32, max: f32) -> Box<dyn BtNode<W, S>>
where
    F: Fn(&TickContext, W::Agent, &W, &S) -> f32 + 'static,
    W: WorldMut + 'static,
    S: 'static,
{
    Box::new(InRange::new(distance, min, max))
}

pub fn action<W, S, F>(run: F) -> Box<dyn BtNode<W, S>>
where
    F: FnMut(&TickContext, W::Agent, &mut W, &mut S) -> BtStatus + 'static,
    W: WorldMut + 'static,
    S: 'static,
{
    Box::new(ActionLeaf::new(run))
}
