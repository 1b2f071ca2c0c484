//! Colored Circles - touch-driven color matching ball game
//!
//! Core modules:
//! - `sim`: Seeded simulation (physics, collisions, touch input, target zone)
//! - `settings`: Data-driven game configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Velocity multiplier applied on every integration step (not dt-scaled)
    pub const FRICTION: f32 = 0.98;
    /// Velocity components below this magnitude snap to zero (units/s)
    pub const REST_SPEED: f32 = 1.0;
    /// Energy kept on wall bounce
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Energy kept on ball-ball collision
    pub const BALL_RESTITUTION: f32 = 0.85;
    /// Max angle of the anti-sticking nudge after a collision (radians)
    pub const JITTER_MAX_ANGLE: f32 = std::f32::consts::PI * 0.1;
    /// Max magnitude of the anti-sticking nudge
    pub const JITTER_MAX_FORCE: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 40.0;
    pub const SPAWN_PADDING: f32 = 100.0;
    /// Balls smaller than this have finished absorbing
    pub const REMOVAL_RADIUS: f32 = 2.0;

    /// Touch pulse animation
    pub const TOUCH_ANIM_DURATION: f32 = 0.3;
    pub const TOUCH_ANIM_PEAK: f32 = 1.2;

    /// Touch controller
    pub const GRAB_DAMPING: f32 = 0.5;
    pub const MOVE_SMOOTHING: f32 = 0.3;
    pub const RELEASE_SMOOTHING: f32 = 0.5;
    /// Release only re-estimates velocity if the last sample is this recent (s)
    pub const RELEASE_WINDOW: f64 = 0.1;
    pub const MAX_RELEASE_SPEED: f32 = 1000.0;

    /// Target zone
    pub const ATTRACTION_FORCE: f32 = 0.15 * 300.0;
    pub const RELEASE_ASSIST_FORCE: f32 = 150.0;
    /// Velocity multiplier for a captured ball, per frame
    pub const CAPTURE_DRAG: f32 = 0.9;
    /// Radius multiplier for an absorbing ball, per frame
    pub const ABSORB_SHRINK: f32 = 0.95;

    /// Confetti burst
    pub const CONFETTI_PER_SPAWN: usize = 150;
    pub const CONFETTI_GRAVITY: f32 = 0.5;
    pub const CONFETTI_AIR_DRAG: f32 = 0.99;
    pub const CONFETTI_FADE: f32 = 0.995;

    /// Largest frame delta the headless driver feeds the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Exponential smoothing: blend `sample` into `old` with weight `k`
#[inline]
pub fn smooth(old: Vec2, sample: Vec2, k: f32) -> Vec2 {
    old * (1.0 - k) + sample * k
}

/// Unit vector from `from` toward `to`, zero if they coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
