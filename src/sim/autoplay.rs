//! Idle/demo mode: a scripted player
//!
//! Drives the game only through pointer events: grab the ball the target
//! asks for, drag it onto the slot at a bounded speed, let go.

use glam::Vec2;

use super::state::GameState;
use super::touch::PointerEvent;

/// Pointer is let go once this close to the slot center
const RELEASE_DISTANCE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    Idle,
    Dragging { ball_id: u32, pointer: Vec2 },
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    /// Pointer speed while dragging (units/s)
    pub drag_speed: f32,
    plan: Plan,
}

impl Autoplay {
    pub fn new(drag_speed: f32) -> Self {
        assert!(drag_speed > 0.0, "drag speed must be positive");
        Self {
            drag_speed,
            plan: Plan::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.plan, Plan::Dragging { .. })
    }

    /// Next pointer event to feed before ticking a frame of `dt` seconds
    pub fn next_event(&mut self, state: &GameState, dt: f32) -> Option<PointerEvent> {
        if !state.is_active() {
            self.plan = Plan::Idle;
            return None;
        }
        let now = state.time;
        let center = state.target.center();

        match self.plan {
            Plan::Idle => {
                if state.touch.grab().is_some() {
                    return None;
                }
                // Balls already shrinking in the slot need no help
                let ball = state.balls.iter().find(|b| {
                    b.color == state.target.color
                        && b.pos.distance(center) >= state.target.shrink_radius()
                })?;
                log::debug!("Autoplay grabbing ball {}", ball.id);
                self.plan = Plan::Dragging {
                    ball_id: ball.id,
                    pointer: ball.pos,
                };
                Some(PointerEvent::press(ball.pos, now))
            }
            Plan::Dragging { ball_id, pointer } => {
                if state.touch.grabbed_id() != Some(ball_id) {
                    // Ball vanished, or the press landed on a neighbour
                    self.plan = Plan::Idle;
                    return state
                        .touch
                        .grab()
                        .map(|_| PointerEvent::release(pointer, now));
                }

                let to_center = center - pointer;
                let distance = to_center.length();
                if distance <= RELEASE_DISTANCE {
                    self.plan = Plan::Idle;
                    return Some(PointerEvent::release(pointer, now));
                }

                let step = (self.drag_speed * dt).min(distance);
                let next = pointer + to_center / distance * step;
                self.plan = Plan::Dragging {
                    ball_id,
                    pointer: next,
                };
                Some(PointerEvent::moved(next, now))
            }
        }
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(600.0)
    }
}
