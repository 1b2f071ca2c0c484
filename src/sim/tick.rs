//! Per-frame simulation step
//!
//! Order: integrate -> target zone -> removals -> ball collisions ->
//! touch animations -> confetti.

use super::collision::resolve_collisions;
use super::geom::Rect;
use super::state::GameState;
use super::target::Absorption;

/// Advance the game by one rendered frame of `dt` seconds
///
/// `bounds` is the current arena; a resize simply passes new bounds and the
/// wall step pushes balls back inside.
pub fn tick(state: &mut GameState, bounds: Rect, dt: f32) {
    assert!(dt.is_finite() && dt >= 0.0, "frame dt must be finite and >= 0, got {dt}");

    state.bounds = bounds;
    state.time += dt as f64;

    for ball in &mut state.balls {
        ball.integrate(dt, &bounds);
    }

    let mut finished = Vec::new();
    if state.is_active() {
        for ball in &mut state.balls {
            if state.target.absorb(ball) == Absorption::Finished {
                finished.push(ball.id);
            }
        }
    }
    for id in finished {
        state.remove_ball(id);
    }

    resolve_collisions(&mut state.balls, &mut state.rng);

    for ball in &mut state.balls {
        ball.update_touch_animation(dt);
    }

    state.confetti.update();
}
