//! Completion confetti
//!
//! Simulation only: particles are stepped once per frame (not dt-scaled)
//! and exposed for whoever draws them. Active while any particle is visible.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{Color, Rect};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfettiShape {
    Square,
    Circle,
    Star,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub size: f32,
    /// Degrees
    pub rotation: f32,
    pub rotation_speed: f32,
    pub shape: ConfettiShape,
    pub color: Color,
    pub alpha: u8,
}

impl ConfettiPiece {
    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        let shape = match rng.random_range(0..3) {
            0 => ConfettiShape::Square,
            1 => ConfettiShape::Circle,
            _ => ConfettiShape::Star,
        };
        let palette = &Color::CONFETTI_PALETTE;
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 40.0,
                rng.random::<f32>() * -25.0 - 15.0,
            ),
            size: rng.random::<f32>() * 20.0 + 10.0,
            rotation: rng.random::<f32>() * 360.0,
            rotation_speed: (rng.random::<f32>() - 0.5) * 30.0,
            shape,
            color: palette[rng.random_range(0..palette.len())],
            alpha: u8::MAX,
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += CONFETTI_GRAVITY;
        self.vel.x *= CONFETTI_AIR_DRAG;
        self.rotation += self.rotation_speed;
        // Truncating cast: below 200 this always drops by at least 1
        self.alpha = (self.alpha as f32 * CONFETTI_FADE) as u8;
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pub pieces: Vec<ConfettiPiece>,
}

impl Confetti {
    /// Three bursts across the middle of the arena
    pub fn burst<R: Rng + ?Sized>(&mut self, bounds: &Rect, rng: &mut R) {
        let spawn_points = [
            bounds.lerp_point(0.25, 0.5),
            bounds.lerp_point(0.5, 0.5),
            bounds.lerp_point(0.75, 0.5),
        ];
        self.pieces.reserve(spawn_points.len() * CONFETTI_PER_SPAWN);
        for point in spawn_points {
            for _ in 0..CONFETTI_PER_SPAWN {
                self.pieces.push(ConfettiPiece::spawn(point, rng));
            }
        }
    }

    pub fn update(&mut self) {
        for piece in &mut self.pieces {
            piece.step();
        }
        self.pieces.retain(ConfettiPiece::is_visible);
    }

    pub fn is_active(&self) -> bool {
        !self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}
