use ai_core::{TickContext, Vec2};

#[test]
fn distance_and_direction() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);

    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance(a), 5.0);

    let dir = a.direction_to(b);
    assert!((dir.length() - 1.0).abs() < 1e-6);
    assert!((dir.x - 0.6).abs() < 1e-6);
    assert!((dir.y - 0.8).abs() < 1e-6);
}

#[test]
fn degenerate_direction_is_zero() {
    let p = Vec2::new(3.0, -2.0);
    assert_eq!(p.direction_to(p), Vec2::ZERO);
    assert_eq!(Vec2::new(f32::NAN, 0.0).normalize_or_zero(), Vec2::ZERO);
}

#[test]
fn fixed_step_context_advances_clock() {
    let ctx = TickContext::fixed_step(0, 0.5);
    assert_eq!(ctx.time_seconds, 0.0);

    let next = ctx.next();
    assert_eq!(next.tick, 1);
    assert_eq!(next.dt_seconds, 0.5);
    assert_eq!(next.time_seconds, 0.5);
    assert_eq!(TickContext::fixed_step(4, 0.5).time_seconds, 2.0);
}
