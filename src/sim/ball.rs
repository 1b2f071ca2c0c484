//! Ball entity: kinematics, wall bounces and pairwise contact response

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{Color, Rect};
use crate::consts::*;

/// Render scale of the touch pulse for `remaining` seconds left of `duration`
///
/// Decays linearly from `TOUCH_ANIM_PEAK` to 1.0.
#[inline]
pub fn touch_scale(remaining: f32, duration: f32) -> f32 {
    if duration <= 0.0 || remaining <= 0.0 {
        return 1.0;
    }
    1.0 + (TOUCH_ANIM_PEAK - 1.0) * (remaining / duration).min(1.0)
}

/// A colored ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Seconds left on the touch pulse (0 = idle)
    pub touch_timer: f32,
    /// Latched once the ball has been captured by the target zone
    #[serde(default)]
    pub absorbing: bool,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, radius: f32, color: Color) -> Self {
        assert!(
            radius.is_finite() && radius >= 0.0,
            "ball radius must be finite and non-negative, got {radius}"
        );
        assert!(pos.is_finite(), "ball position must be finite, got {pos}");
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            touch_timer: 0.0,
            absorbing: false,
        }
    }

    /// Collision mass (area-proportional)
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    pub fn is_animating(&self) -> bool {
        self.touch_timer > 0.0
    }

    /// Current render scale from the touch pulse
    pub fn touch_scale(&self) -> f32 {
        touch_scale(self.touch_timer, TOUCH_ANIM_DURATION)
    }

    /// Advance one step: friction, move, rest snap, wall bounce
    ///
    /// Friction is applied once per call regardless of `dt`, so the effective
    /// damping depends on frame rate.
    pub fn integrate(&mut self, dt: f32, bounds: &Rect) {
        assert!(dt.is_finite() && dt >= 0.0, "frame dt must be finite and >= 0, got {dt}");

        self.vel *= FRICTION;
        self.pos += self.vel * dt;

        if self.vel.x.abs() < REST_SPEED {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < REST_SPEED {
            self.vel.y = 0.0;
        }

        if self.pos.x - self.radius < bounds.left {
            self.pos.x = bounds.left + self.radius;
            self.vel.x = self.vel.x.abs() * WALL_RESTITUTION;
        } else if self.pos.x + self.radius > bounds.right {
            self.pos.x = bounds.right - self.radius;
            self.vel.x = -self.vel.x.abs() * WALL_RESTITUTION;
        }

        if self.pos.y - self.radius < bounds.top {
            self.pos.y = bounds.top + self.radius;
            self.vel.y = self.vel.y.abs() * WALL_RESTITUTION;
        } else if self.pos.y + self.radius > bounds.bottom {
            self.pos.y = bounds.bottom - self.radius;
            self.vel.y = -self.vel.y.abs() * WALL_RESTITUTION;
        }
    }

    /// Hit test (inclusive of the rim)
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.pos.distance(p) <= self.radius
    }

    pub fn intersects(&self, other: &Ball) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Resolve contact with `other`
    ///
    /// Approaching pairs exchange a mass-weighted impulse and get a small
    /// random nudge so they never rest in exact contact. Any overlap is
    /// pushed apart along the contact normal, approaching or not.
    pub fn resolve_collision<R: Rng + ?Sized>(&mut self, other: &mut Ball, rng: &mut R) {
        let delta = other.pos - self.pos;
        let distance = delta.length();
        if distance == 0.0 {
            return;
        }
        let normal = delta / distance;

        let m1 = self.mass();
        let m2 = other.mass();
        let total_mass = m1 + m2;
        if total_mass <= 0.0 {
            return;
        }
        // Each ball moves by the other's share
        let share1 = m2 / total_mass;
        let share2 = m1 / total_mass;

        let vel_along_normal = (other.vel - self.vel).dot(normal);
        let approaching = vel_along_normal <= 0.0;

        if approaching {
            let j = -(1.0 + BALL_RESTITUTION) * vel_along_normal;
            self.vel -= normal * (j * share1);
            other.vel += normal * (j * share2);
        }

        let overlap = self.radius + other.radius - distance;
        if overlap > 0.0 {
            self.pos -= normal * (overlap * share1);
            other.pos += normal * (overlap * share2);
        }

        if approaching {
            let angle = rng.random::<f32>() * JITTER_MAX_ANGLE;
            let force = rng.random::<f32>() * JITTER_MAX_FORCE;
            let nudge = Vec2::from_angle(angle) * force;
            self.vel += nudge;
            other.vel -= nudge;
        }
    }

    pub fn start_touch_animation(&mut self) {
        self.touch_timer = TOUCH_ANIM_DURATION;
    }

    pub fn update_touch_animation(&mut self, dt: f32) {
        if self.touch_timer > 0.0 {
            self.touch_timer = (self.touch_timer - dt).max(0.0);
        }
    }
}
