#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use ai_core::{TickContext, Vec2, WorldMut, WorldView};
use ai_enemy::{EnemyConfig, EnemyWorldMut, EnemyWorldView, FactionLayer, StateLabel};

pub const ENEMY: u64 = 1;

/// Something the attack hit test can find.
#[derive(Debug, Clone, Copy)]
pub struct Hittable {
    pub id: u32,
    pub position: Vec2,
    pub layer: FactionLayer,
}

/// Records every command the enemy issues.
#[derive(Debug, Default)]
pub struct TestWorld {
    pub positions: BTreeMap<u64, Vec2>,
    pub targets: BTreeMap<u64, Vec2>,
    pub hittables: Vec<Hittable>,

    pub moves: Vec<(u64, Vec2, f32)>,
    pub labels: Vec<(u64, StateLabel)>,
    pub animations: Vec<(u64, &'static str)>,
    pub sounds: Vec<(u64, &'static str)>,
    /// Area queries take `&self`, so they are recorded through a cell.
    pub queries: RefCell<Vec<(Vec2, f32, FactionLayer)>>,
    pub damage: Vec<(u32, u32)>,
}

impl TestWorld {
    /// Enemy at the origin, target `distance` units to the right.
    pub fn with_target_at(distance: f32) -> Self {
        let mut world = Self::default();
        world.positions.insert(ENEMY, Vec2::ZERO);
        world.targets.insert(ENEMY, Vec2::new(distance, 0.0));
        world
    }

    /// Enemy at the origin with nothing to hunt.
    pub fn without_target() -> Self {
        let mut world = Self::default();
        world.positions.insert(ENEMY, Vec2::ZERO);
        world
    }

    pub fn add_player_at(&mut self, id: u32, position: Vec2) {
        self.hittables.push(Hittable {
            id,
            position,
            layer: FactionLayer::PLAYER,
        });
    }

    pub fn last_move(&self, agent: u64) -> Option<(Vec2, f32)> {
        self.moves
            .iter()
            .rev()
            .find(|(a, _, _)| *a == agent)
            .map(|(_, dir, speed)| (*dir, *speed))
    }

    pub fn attack_animations(&self) -> usize {
        self.animations.iter().filter(|(_, e)| *e == "attack").count()
    }
}

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

impl EnemyWorldView for TestWorld {
    fn position(&self, agent: u64) -> Option<Vec2> {
        self.positions.get(&agent).copied()
    }

    fn target_position(&self, agent: u64) -> Option<Vec2> {
        self.targets.get(&agent).copied()
    }
}

impl EnemyWorldMut for TestWorld {
    type Target = u32;

    fn move_toward(&mut self, agent: u64, direction: Vec2, speed: f32) {
        self.moves.push((agent, direction, speed));
    }

    fn set_animation_state(&mut self, agent: u64, label: StateLabel) {
        self.labels.push((agent, label));
    }

    fn trigger_animation(&mut self, agent: u64, event: &'static str) {
        self.animations.push((agent, event));
    }

    fn query_area(&self, center: Vec2, radius: f32, layer: FactionLayer) -> Option<u32> {
        self.queries.borrow_mut().push((center, radius, layer));
        self.hittables
            .iter()
            .find(|h| h.layer.intersects(layer) && h.position.distance(center) <= radius)
            .map(|h| h.id)
    }

    fn apply_damage(&mut self, target: u32, amount: u32) {
        self.damage.push((target, amount));
    }

    fn play_sound(&mut self, agent: u64, name: &'static str) {
        self.sounds.push((agent, name));
    }
}

/// Timings that are exact in binary floating point, so frame boundaries are unambiguous.
pub fn config() -> EnemyConfig {
    EnemyConfig {
        attack_range: 2.0,
        detection_range: 8.0,
        patrol_speed: 2.0,
        chase_speed: 4.0,
        waypoint_tolerance: 0.5,
        attack_windup_seconds: 0.5,
        attack_cooldown_seconds: 1.0,
        attack_damage: 7,
        attack_radius: 0.5,
        attack_offset: Vec2::new(0.75, 0.0),
        stun_seconds: 1.5,
        ..EnemyConfig::default()
    }
}

pub const DT: f32 = 0.125;

pub fn frame(tick: u64) -> TickContext {
    TickContext::fixed_step(tick, DT)
}
