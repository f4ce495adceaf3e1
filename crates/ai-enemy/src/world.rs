//! Collaborator interfaces the enemy consumes from the host.
//!
//! The enemy never renders, integrates physics or plays audio itself. It only
//! issues commands and queries through these traits, so a game engine, a
//! headless simulation and a recording test world are interchangeable.

use ai_core::{Vec2, WorldMut, WorldView};
use serde::{Deserialize, Serialize};

use crate::state::StateLabel;

/// Collision/faction layer bitmask used by area queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionLayer(pub u32);

impl FactionLayer {
    pub const PLAYER: FactionLayer = FactionLayer(1 << 0);
    pub const ENEMY: FactionLayer = FactionLayer(1 << 1);
    pub const NEUTRAL: FactionLayer = FactionLayer(1 << 2);

    pub fn contains(self, other: FactionLayer) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: FactionLayer) -> bool {
        self.0 & other.0 != 0
    }
}

/// Read-only queries.
pub trait EnemyWorldView: WorldView {
    /// Position of `agent`, or `None` when it is no longer in the world.
    fn position(&self, agent: Self::Agent) -> Option<Vec2>;

    /// Position of the target `agent` is hunting, or `None` when there is none.
    fn target_position(&self, agent: Self::Agent) -> Option<Vec2>;
}

/// Commands and notifications.
pub trait EnemyWorldMut: WorldMut + EnemyWorldView {
    /// Whatever the area query can hit.
    type Target: Copy + core::fmt::Debug;

    /// Drive `agent` along `direction` (unit length or zero) at `speed` units per second.
    fn move_toward(&mut self, agent: Self::Agent, direction: Vec2, speed: f32);

    fn stop(&mut self, agent: Self::Agent) {
        self.move_toward(agent, Vec2::ZERO, 0.0);
    }

    fn set_animation_state(&mut self, agent: Self::Agent, label: StateLabel);

    fn trigger_animation(&mut self, agent: Self::Agent, event: &'static str);

    fn query_area(&self, center: Vec2, radius: f32, layer: FactionLayer) -> Option<Self::Target>;

    fn apply_damage(&mut self, target: Self::Target, amount: u32);

    /// Fire-and-forget.
    fn play_sound(&mut self, agent: Self::Agent, name: &'static str);
}

/// Distance from `agent` to its target; infinite when either position is unknown.
pub fn distance_to_target<W>(world: &W, agent: W::Agent) -> f32
where
    W: EnemyWorldView,
{
    match (world.position(agent), world.target_position(agent)) {
        (Some(own), Some(target)) => own.distance(target),
        _ => f32::INFINITY,
    }
}
