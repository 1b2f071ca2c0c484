//! Touch controller: drag balls around and fling them on release
//!
//! State machine: Idle -> Grabbed -> Idle. While grabbed the ball follows
//! the pointer directly and its velocity tracks a smoothed finite difference
//! of the pointer samples, so it keeps moving after release.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::target::TargetZone;
use crate::consts::*;
use crate::smooth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// A pointer sample from the input source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Vec2,
    /// Seconds on a monotonic clock
    pub time: f64,
}

impl PointerEvent {
    pub fn press(pos: Vec2, time: f64) -> Self {
        Self {
            kind: PointerKind::Press,
            pos,
            time,
        }
    }

    pub fn moved(pos: Vec2, time: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            pos,
            time,
        }
    }

    pub fn release(pos: Vec2, time: f64) -> Self {
        Self {
            kind: PointerKind::Release,
            pos,
            time,
        }
    }
}

/// An active drag. Holds the ball's id, not a reference into the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub ball_id: u32,
    /// Pointer position minus ball center at press time
    pub offset: Vec2,
    pub last_pos: Vec2,
    pub last_time: f64,
}

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchOutcome {
    Ignored,
    Grabbed { ball_id: u32 },
    Dragged { ball_id: u32 },
    Released { ball_id: u32, vel: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct TouchController {
    grab: Option<Grab>,
}

impl TouchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grab(&self) -> Option<&Grab> {
        self.grab.as_ref()
    }

    pub fn grabbed_id(&self) -> Option<u32> {
        self.grab.map(|g| g.ball_id)
    }

    /// Drop any grab without touching the ball (restart)
    pub fn cancel(&mut self) {
        self.grab = None;
    }

    pub fn handle(
        &mut self,
        event: &PointerEvent,
        balls: &mut [Ball],
        target: &TargetZone,
    ) -> TouchOutcome {
        assert!(
            event.pos.is_finite(),
            "pointer position must be finite, got {}",
            event.pos
        );
        match event.kind {
            PointerKind::Press => self.press(event, balls),
            PointerKind::Move => self.drag(event, balls),
            PointerKind::Release => self.release(event, balls, target),
        }
    }

    fn press(&mut self, event: &PointerEvent, balls: &mut [Ball]) -> TouchOutcome {
        let Some(ball) = balls.iter_mut().find(|b| b.contains_point(event.pos)) else {
            return TouchOutcome::Ignored;
        };

        ball.start_touch_animation();
        ball.vel *= GRAB_DAMPING;
        ball.absorbing = false;
        self.grab = Some(Grab {
            ball_id: ball.id,
            offset: event.pos - ball.pos,
            last_pos: event.pos,
            last_time: event.time,
        });
        TouchOutcome::Grabbed { ball_id: ball.id }
    }

    fn drag(&mut self, event: &PointerEvent, balls: &mut [Ball]) -> TouchOutcome {
        let Some(grab) = self.grab.as_mut() else {
            return TouchOutcome::Ignored;
        };
        let Some(ball) = balls.iter_mut().find(|b| b.id == grab.ball_id) else {
            return TouchOutcome::Ignored;
        };

        let dt = (event.time - grab.last_time) as f32;
        if dt > 0.0 {
            let desired = event.pos - grab.offset;
            let sample = (desired - ball.pos) / dt;
            ball.vel = smooth(ball.vel, sample, MOVE_SMOOTHING);
            ball.pos = desired;
        }

        grab.last_pos = event.pos;
        grab.last_time = event.time;
        TouchOutcome::Dragged { ball_id: ball.id }
    }

    fn release(
        &mut self,
        event: &PointerEvent,
        balls: &mut [Ball],
        target: &TargetZone,
    ) -> TouchOutcome {
        let Some(grab) = self.grab.take() else {
            return TouchOutcome::Ignored;
        };
        let Some(ball) = balls.iter_mut().find(|b| b.id == grab.ball_id) else {
            return TouchOutcome::Ignored;
        };

        let elapsed = event.time - grab.last_time;
        if elapsed > 0.0 && elapsed <= RELEASE_WINDOW {
            let sample = (event.pos - grab.last_pos) / elapsed as f32;
            ball.vel = smooth(ball.vel, sample, RELEASE_SMOOTHING);
            ball.vel = ball.vel.clamp_length_max(MAX_RELEASE_SPEED);
        }

        target.release_assist(ball);

        TouchOutcome::Released {
            ball_id: ball.id,
            vel: ball.vel,
        }
    }
}
