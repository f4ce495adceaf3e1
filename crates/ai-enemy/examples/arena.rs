//! Headless arena: one enemy patrols, spots a walking player, chases, attacks,
//! and gets stunned once.
//!
//! ```text
//! RUST_LOG=ai_enemy=debug cargo run -p ai-enemy --example arena [config.yaml]
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use ai_core::{TickContext, Vec2, WorldMut, WorldView};
use ai_enemy::{
    EnemyBrain, EnemyConfig, EnemyWorldMut, EnemyWorldView, FactionLayer, StateLabel,
};
use ai_tools::Tracer;
use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

const ENEMY: u64 = 1;
const PLAYER_ID: u32 = 100;

#[derive(Debug, Default)]
struct Body {
    position: Vec2,
    velocity: Vec2,
}

#[derive(Debug, Default)]
struct Arena {
    enemies: BTreeMap<u64, Body>,
    player: Body,
    player_health: u32,
}

impl Arena {
    fn integrate(&mut self, dt: f32) {
        for body in self.enemies.values_mut() {
            body.position += body.velocity * dt;
        }
        self.player.position += self.player.velocity * dt;
    }
}

impl WorldView for Arena {
    type Agent = u64;
}

impl WorldMut for Arena {}

impl EnemyWorldView for Arena {
    fn position(&self, agent: u64) -> Option<Vec2> {
        self.enemies.get(&agent).map(|b| b.position)
    }

    fn target_position(&self, _agent: u64) -> Option<Vec2> {
        (self.player_health > 0).then_some(self.player.position)
    }
}

impl EnemyWorldMut for Arena {
    type Target = u32;

    fn move_toward(&mut self, agent: u64, direction: Vec2, speed: f32) {
        if let Some(body) = self.enemies.get_mut(&agent) {
            body.velocity = direction * speed;
        }
    }

    fn set_animation_state(&mut self, agent: u64, label: StateLabel) {
        tracing::info!(agent, %label, "animation state");
    }

    fn trigger_animation(&mut self, agent: u64, event: &'static str) {
        tracing::info!(agent, event, "animation trigger");
    }

    fn query_area(&self, center: Vec2, radius: f32, layer: FactionLayer) -> Option<u32> {
        let hit = layer.contains(FactionLayer::PLAYER)
            && self.player_health > 0
            && self.player.position.distance(center) <= radius;
        hit.then_some(PLAYER_ID)
    }

    fn apply_damage(&mut self, _target: u32, amount: u32) {
        self.player_health = self.player_health.saturating_sub(amount);
        tracing::info!(health = self.player_health, "player hit");
    }

    fn play_sound(&mut self, agent: u64, name: &'static str) {
        tracing::debug!(agent, name, "sound");
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => EnemyConfig::load(&path)?,
        None => EnemyConfig::default().with_patrol_points([
            Vec2::new(-4.0, 0.0),
            Vec2::new(4.0, 0.0),
        ]),
    };

    let mut arena = Arena {
        player: Body {
            position: Vec2::new(20.0, 0.0),
            velocity: Vec2::new(-1.5, 0.0),
        },
        player_health: 50,
        ..Arena::default()
    };
    arena.enemies.insert(ENEMY, Body::default());

    let mut enemy =
        EnemyBrain::<Arena>::new(ENEMY, config)?.with_tracer(Tracer::new().with_log());

    let mut ctx = TickContext::fixed_step(0, 1.0 / 30.0);
    for _ in 0..600 {
        if ctx.tick == 400 {
            enemy.request_stun(&ctx, &mut arena);
        }
        // The player stops once it reaches the patrol route.
        if arena.player.position.x <= 2.0 {
            arena.player.velocity = Vec2::ZERO;
        }

        enemy.tick(&ctx, &mut arena);
        arena.integrate(ctx.dt_seconds);
        ctx = ctx.next();
    }

    if let Some(log) = enemy.tracer.log() {
        for e in &log.events {
            println!("[tick={}] {} a={} b={}", e.tick, e.tag, e.a, e.b);
        }
    }
    println!(
        "final: label={} player_health={}",
        enemy.state_label(),
        arena.player_health
    );
    Ok(())
}
