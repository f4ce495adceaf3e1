//! Timed sub-behaviors: attack windup/hit/cooldown and the stun lockout.
//!
//! Both run outside the tree. Leaves (or the host, for stuns) arm them by
//! scheduling [`EnemyTimer`] events on the agent's own queue; the brain resolves
//! due events before each evaluation. Nothing here cancels an in-flight timer.

use ai_core::Vec2;

use crate::config::EnemyConfig;
use crate::state::{AttackPhase, EnemyState, EnemyTimer};
use crate::world::EnemyWorldMut;

/// Start an attack if none is in flight. Returns `true` when a new one started.
///
/// A repeat call during windup or cooldown only holds the agent still.
pub(crate) fn launch_attack<W>(
    windup_seconds: f32,
    agent: W::Agent,
    world: &mut W,
    state: &mut EnemyState,
) -> bool
where
    W: EnemyWorldMut,
{
    world.stop(agent);
    if state.attack != AttackPhase::Idle {
        return false;
    }

    world.trigger_animation(agent, "attack");
    world.play_sound(agent, "attack");
    state.attack = AttackPhase::Windup;
    state.timers.schedule_after(windup_seconds, EnemyTimer::AttackHit);
    tracing::debug!(?agent, windup_seconds, "attack windup started");
    true
}

/// Arm the stun lockout. Returns `false` (and does nothing) while already stunned.
pub(crate) fn request_stun<W>(
    config: &EnemyConfig,
    agent: W::Agent,
    world: &mut W,
    state: &mut EnemyState,
) -> bool
where
    W: EnemyWorldMut,
{
    if state.is_stunned {
        return false;
    }

    state.is_stunned = true;
    world.stop(agent);
    world.play_sound(agent, "stun");
    state
        .timers
        .schedule_after(config.stun_seconds, EnemyTimer::StunOver);
    tracing::info!(?agent, seconds = config.stun_seconds, "stunned");
    true
}

/// Where the hit test is centered for the agent's current position and facing.
pub fn attack_anchor(config: &EnemyConfig, position: Vec2, state: &EnemyState) -> Vec2 {
    let offset = config.attack_offset;
    position + Vec2::new(offset.x * state.facing.sign(), offset.y)
}

/// Apply one due timer event to the agent's state.
pub(crate) fn on_timer<W>(
    config: &EnemyConfig,
    agent: W::Agent,
    world: &mut W,
    state: &mut EnemyState,
    timer: EnemyTimer,
) where
    W: EnemyWorldMut,
{
    match timer {
        EnemyTimer::AttackHit => {
            resolve_hit(config, agent, world, state);
            state.can_attack = false;
            state.attack = AttackPhase::Cooldown;
            state
                .timers
                .schedule_after(config.attack_cooldown_seconds, EnemyTimer::AttackReady);
        }
        EnemyTimer::AttackReady => {
            state.can_attack = true;
            state.attack = AttackPhase::Idle;
            tracing::debug!(?agent, "attack ready");
        }
        EnemyTimer::StunOver => {
            state.is_stunned = false;
            tracing::debug!(?agent, "stun over");
        }
    }
}

/// Single hit test at the anchor; damage lands at most once per attack.
fn resolve_hit<W>(config: &EnemyConfig, agent: W::Agent, world: &mut W, state: &EnemyState)
where
    W: EnemyWorldMut,
{
    let Some(position) = world.position(agent) else {
        tracing::debug!(?agent, "attack hit test skipped: agent has no position");
        return;
    };

    let anchor = attack_anchor(config, position, state);
    match world.query_area(anchor, config.attack_radius, config.target_layer) {
        Some(target) => {
            world.apply_damage(target, config.attack_damage);
            tracing::info!(?agent, ?target, damage = config.attack_damage, "attack landed");
        }
        None => tracing::debug!(?agent, "attack missed"),
    }
}
