//! The enemy's decision tree.
//!
//! Root selector, highest priority first:
//!
//! 1. stunned: `is_stunned` -> hold still (`Running`)
//! 2. attack: target within `[0, attack_range]` -> `can_attack` -> launch attack (`Success`)
//! 3. chase: target within `[0, detection_range]` -> move toward target (`Running`)
//! 4. patrol: walk the patrol route (`Running`); unguarded, so the root never fails
//!
//! Every guard is re-checked on every tick.

use ai_bt::{action, condition, in_range, selector, sequence, BehaviorTree, BtNode, BtStatus};
use ai_core::{TickContext, Vec2};

use crate::combat;
use crate::config::EnemyConfig;
use crate::state::{EnemyState, Facing, StateLabel};
use crate::world::{distance_to_target, EnemyWorldMut};

pub type EnemyTree<W> = BehaviorTree<W, EnemyState>;
pub type EnemyNode<W> = Box<dyn BtNode<W, EnemyState>>;

/// Build the four-branch priority tree for `config`.
pub fn build_tree<W>(config: &EnemyConfig) -> EnemyTree<W>
where
    W: EnemyWorldMut + 'static,
{
    BehaviorTree::new(selector(vec![
        stunned_branch(),
        attack_branch(config.attack_range, config.attack_windup_seconds),
        chase_branch(config.detection_range, config.chase_speed),
        patrol_branch(
            config.patrol_points.clone(),
            config.patrol_speed,
            config.waypoint_tolerance,
        ),
    ]))
}

pub fn stunned_branch<W>() -> EnemyNode<W>
where
    W: EnemyWorldMut + 'static,
{
    sequence(vec![
        condition(
            |_ctx: &TickContext, _agent: W::Agent, _world: &W, state: &EnemyState| {
                state.is_stunned
            },
        ),
        action(
            |_ctx: &TickContext, agent: W::Agent, world: &mut W, state: &mut EnemyState| {
                enter(agent, world, state, StateLabel::Stunned);
                world.stop(agent);
                BtStatus::Running
            },
        ),
    ])
}

pub fn attack_branch<W>(attack_range: f32, windup_seconds: f32) -> EnemyNode<W>
where
    W: EnemyWorldMut + 'static,
{
    sequence(vec![
        in_range(target_distance::<W>, 0.0, attack_range),
        condition(
            |_ctx: &TickContext, _agent: W::Agent, _world: &W, state: &EnemyState| {
                state.can_attack
            },
        ),
        action(
            move |_ctx: &TickContext, agent: W::Agent, world: &mut W, state: &mut EnemyState| {
                enter(agent, world, state, StateLabel::Attack);
                if let (Some(own), Some(target)) =
                    (world.position(agent), world.target_position(agent))
                {
                    face(state, target - own);
                }
                combat::launch_attack(windup_seconds, agent, world, state);
                BtStatus::Success
            },
        ),
    ])
}

pub fn chase_branch<W>(detection_range: f32, chase_speed: f32) -> EnemyNode<W>
where
    W: EnemyWorldMut + 'static,
{
    sequence(vec![
        in_range(target_distance::<W>, 0.0, detection_range),
        action(
            move |_ctx: &TickContext, agent: W::Agent, world: &mut W, state: &mut EnemyState| {
                enter(agent, world, state, StateLabel::Chase);
                match (world.position(agent), world.target_position(agent)) {
                    (Some(own), Some(target)) => {
                        let direction = own.direction_to(target);
                        face(state, direction);
                        world.move_toward(agent, direction, chase_speed);
                    }
                    _ => world.stop(agent),
                }
                BtStatus::Running
            },
        ),
    ])
}

pub fn patrol_branch<W>(points: Vec<Vec2>, patrol_speed: f32, tolerance: f32) -> EnemyNode<W>
where
    W: EnemyWorldMut + 'static,
{
    sequence(vec![action(
        move |_ctx: &TickContext, agent: W::Agent, world: &mut W, state: &mut EnemyState| {
            enter(agent, world, state, StateLabel::Patrol);
            patrol_step(&points, patrol_speed, tolerance, agent, world, state);
            BtStatus::Running
        },
    )])
}

fn patrol_step<W>(
    points: &[Vec2],
    speed: f32,
    tolerance: f32,
    agent: W::Agent,
    world: &mut W,
    state: &mut EnemyState,
) where
    W: EnemyWorldMut,
{
    let own = match world.position(agent) {
        Some(own) if !points.is_empty() => own,
        _ => {
            world.stop(agent);
            return;
        }
    };

    let mut index = state.waypoint_index % points.len();
    if own.distance(points[index]) <= tolerance {
        index = (index + 1) % points.len();
        tracing::debug!(?agent, waypoint = index, "patrol waypoint reached");
    }
    state.waypoint_index = index;

    let direction = own.direction_to(points[index]);
    face(state, direction);
    world.move_toward(agent, direction, speed);
}

fn target_distance<W>(_ctx: &TickContext, agent: W::Agent, world: &W, _state: &EnemyState) -> f32
where
    W: EnemyWorldMut,
{
    distance_to_target(world, agent)
}

/// Write the observer label, notifying the animation collaborator only on change.
fn enter<W>(agent: W::Agent, world: &mut W, state: &mut EnemyState, label: StateLabel)
where
    W: EnemyWorldMut,
{
    if state.set_label(label) {
        world.set_animation_state(agent, label);
        tracing::debug!(?agent, %label, "state changed");
    }
}

fn face(state: &mut EnemyState, direction: Vec2) {
    if let Some(facing) = Facing::from_dx(direction.x) {
        state.facing = facing;
    }
}
