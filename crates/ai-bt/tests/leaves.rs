use ai_bt::{action, condition, in_range, sequence, BtNode, BtStatus};
use ai_core::{TickContext, WorldMut, WorldView};

#[derive(Default)]
struct World {
    distance: f32,
}

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

#[derive(Debug, Default)]
struct State {
    guard: bool,
    action_runs: u32,
}

fn ctx(tick: u64) -> TickContext {
    TickContext::fixed_step(tick, 0.1)
}

fn distance(_ctx: &TickContext, _agent: u64, world: &World, _state: &State) -> f32 {
    world.distance
}

#[test]
fn condition_maps_predicate_to_success_or_failure() {
    let mut node = condition(|_ctx: &TickContext, _agent: u64, _world: &World, state: &State| {
        state.guard
    });
    let mut world = World::default();
    let mut state = State::default();

    assert_eq!(node.tick(&ctx(0), 1, &mut world, &mut state), BtStatus::Failure);
    state.guard = true;
    assert_eq!(node.tick(&ctx(1), 1, &mut world, &mut state), BtStatus::Success);
}

#[test]
fn range_is_inclusive_on_both_bounds() {
    let mut node = in_range(distance, 1.0, 2.0);
    let mut state = State::default();

    for (d, expected) in [
        (0.99, BtStatus::Failure),
        (1.0, BtStatus::Success),
        (1.5, BtStatus::Success),
        (2.0, BtStatus::Success),
        (2.01, BtStatus::Failure),
        (f32::INFINITY, BtStatus::Failure),
        (f32::NAN, BtStatus::Failure),
    ] {
        let mut world = World { distance: d };
        assert_eq!(node.tick(&ctx(0), 1, &mut world, &mut state), expected, "distance {d}");
    }
}

#[test]
fn inverted_range_always_fails() {
    let mut node = in_range(distance, 3.0, 1.0);
    let mut state = State::default();

    for d in [0.0, 1.0, 2.0, 3.0, 4.0] {
        let mut world = World { distance: d };
        assert_eq!(node.tick(&ctx(0), 1, &mut world, &mut state), BtStatus::Failure);
    }
}

#[test]
fn action_runs_every_tick_it_is_reached() {
    let mut node = action(|_ctx: &TickContext, _agent: u64, _world: &mut World, state: &mut State| {
        state.action_runs += 1;
        BtStatus::Running
    });
    let mut world = World::default();
    let mut state = State::default();

    for tick in 0..5 {
        assert_eq!(node.tick(&ctx(tick), 1, &mut world, &mut state), BtStatus::Running);
    }
    assert_eq!(state.action_runs, 5);
}

#[test]
fn sequence_rechecks_guard_in_front_of_running_action() {
    let mut node = sequence(vec![
        condition(|_ctx: &TickContext, _agent: u64, _world: &World, state: &State| state.guard),
        action(|_ctx: &TickContext, _agent: u64, _world: &mut World, state: &mut State| {
            state.action_runs += 1;
            BtStatus::Running
        }),
    ]);
    let mut world = World::default();
    let mut state = State {
        guard: true,
        ..State::default()
    };

    assert_eq!(node.tick(&ctx(0), 1, &mut world, &mut state), BtStatus::Running);
    assert_eq!(node.tick(&ctx(1), 1, &mut world, &mut state), BtStatus::Running);

    // No memoized progress: the guard is evaluated again and stops the action.
    state.guard = false;
    assert_eq!(node.tick(&ctx(2), 1, &mut world, &mut state), BtStatus::Failure);
    assert_eq!(state.action_runs, 2);

    state.guard = true;
    assert_eq!(node.tick(&ctx(3), 1, &mut world, &mut state), BtStatus::Running);
    assert_eq!(state.action_runs, 3);
}
