//! Seeded simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Caller-supplied frame dt and arena bounds
//! - Seeded RNG only
//! - Stable iteration order (ball list order)

pub mod autoplay;
pub mod ball;
pub mod collision;
pub mod confetti;
pub mod geom;
pub mod state;
pub mod target;
pub mod tick;
pub mod touch;

pub use autoplay::Autoplay;
pub use ball::{Ball, touch_scale};
pub use collision::{pair_mut, resolve_collisions};
pub use confetti::{Confetti, ConfettiPiece, ConfettiShape};
pub use geom::{Color, Rect};
pub use state::{BallView, FrameSnapshot, GameEvent, GamePhase, GameState};
pub use target::{Absorption, TargetZone};
pub use tick::tick;
pub use touch::{Grab, PointerEvent, PointerKind, TouchController, TouchOutcome};
