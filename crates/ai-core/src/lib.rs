//! Deterministic, engine-agnostic primitives shared by the agent crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod tick;
pub mod timer;
pub mod world;

pub use math::Vec2;
pub use tick::TickContext;
pub use timer::{TimerId, TimerQueue};
pub use world::{AgentId, WorldMut, WorldView};
