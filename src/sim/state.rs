//! Game state and core simulation types
//!
//! `GameState` owns the ball arena, the target zone, the touch controller
//! and the seeded RNG. It is created and reset explicitly by its owner.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::confetti::{Confetti, ConfettiPiece};
use super::geom::{Color, Rect};
use super::target::TargetZone;
use super::touch::{PointerEvent, TouchController, TouchOutcome};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls left to sort
    Playing,
    /// Every ball absorbed; waiting for a restart
    Complete,
}

/// Things that happened during a tick, drained by the owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball finished shrinking into the target
    Absorbed { id: u32, color: Color },
    /// The target now asks for a different color
    TargetColorChanged { color: Color },
    /// Last ball absorbed. Emitted once per game.
    Completed,
}

/// What a renderer needs to draw one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub touch_scale: f32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            id: ball.id,
            pos: ball.pos,
            radius: ball.radius,
            color: ball.color,
            touch_scale: ball.touch_scale(),
        }
    }
}

/// Read-only frame snapshot for the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub balls: Vec<BallView>,
    pub target_rect: Rect,
    pub target_color: Color,
    pub active: bool,
    pub confetti_active: bool,
    pub confetti: Vec<ConfettiPiece>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub settings: Settings,
    /// Arena the balls live in
    pub bounds: Rect,
    pub phase: GamePhase,
    /// Live balls (the arena); order decides hit tests and pair resolution
    pub balls: Vec<Ball>,
    pub target: TargetZone,
    pub touch: TouchController,
    pub confetti: Confetti,
    /// Simulated seconds since the last (re)start
    pub time: f64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the given seed and arena
    pub fn new(seed: u64, bounds: Rect, settings: Settings) -> Self {
        assert!(!settings.palette.is_empty(), "palette must not be empty");
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            target: TargetZone::new(settings.target_rect, settings.palette[0]),
            settings,
            bounds,
            phase: GamePhase::Playing,
            balls: Vec::new(),
            touch: TouchController::new(),
            confetti: Confetti::default(),
            time: 0.0,
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_balls();
        state
    }

    /// Start over in (possibly resized) bounds, continuing the RNG stream
    pub fn restart(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.touch.cancel();
        self.confetti.clear();
        self.events.clear();
        self.time = 0.0;
        self.spawn_balls();
        log::info!("Game restarted with {} balls", self.balls.len());
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// One ball per palette color at a random spot inside the padded arena
    fn spawn_balls(&mut self) {
        self.balls.clear();
        let padding = self.settings.spawn_padding;
        let radius = self.settings.ball_radius;
        let span_x = (self.bounds.width() - 2.0 * padding).max(0.0);
        let span_y = (self.bounds.height() - 2.0 * padding).max(0.0);

        for i in 0..self.settings.palette.len() {
            let color = self.settings.palette[i];
            let pos = Vec2::new(
                self.bounds.left + padding + self.rng.random::<f32>() * span_x,
                self.bounds.top + padding + self.rng.random::<f32>() * span_y,
            );
            let id = self.next_entity_id();
            self.balls.push(Ball::new(id, pos, radius, color));
        }

        self.target.color = self.settings.palette[0];
        self.phase = GamePhase::Playing;
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn confetti_active(&self) -> bool {
        self.confetti.is_active()
    }

    pub fn ball(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    /// Feed a pointer event. Presses are ignored once the game is complete.
    pub fn pointer(&mut self, event: PointerEvent) -> TouchOutcome {
        if !self.is_active() {
            return TouchOutcome::Ignored;
        }
        self.touch.handle(&event, &mut self.balls, &self.target)
    }

    /// Remove a fully absorbed ball and pick the next target color
    pub(crate) fn remove_ball(&mut self, id: u32) {
        let Some(index) = self.balls.iter().position(|b| b.id == id) else {
            return;
        };
        let ball = self.balls.remove(index);
        if self.touch.grabbed_id() == Some(id) {
            self.touch.cancel();
        }
        log::debug!("Ball {} absorbed ({:?})", ball.id, ball.color);
        self.events.push(GameEvent::Absorbed {
            id: ball.id,
            color: ball.color,
        });

        if self.balls.is_empty() {
            self.phase = GamePhase::Complete;
            self.events.push(GameEvent::Completed);
            log::info!("All balls sorted after {:.1}s", self.time);
            if self.settings.confetti {
                let bounds = self.bounds;
                self.confetti.burst(&bounds, &mut self.rng);
            }
        } else {
            let pick = self.rng.random_range(0..self.balls.len());
            self.target.color = self.balls[pick].color;
            log::debug!("Target color is now {:?}", self.target.color);
            self.events.push(GameEvent::TargetColorChanged {
                color: self.target.color,
            });
        }
    }

    /// Take all events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Anything still moving or animating? If not, rendering can idle.
    pub fn needs_redraw(&self) -> bool {
        self.balls
            .iter()
            .any(|b| b.is_moving() || b.is_animating())
            || self.confetti.is_active()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            balls: self.balls.iter().map(BallView::from).collect(),
            target_rect: self.target.rect,
            target_color: self.target.color,
            active: self.is_active(),
            confetti_active: self.confetti.is_active(),
            confetti: self.confetti.pieces.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn arena() -> Rect {
        Rect::from_size(800.0, 600.0)
    }

    #[test]
    fn test_new_spawns_one_ball_per_color() {
        let state = GameState::new(1, arena(), Settings::default());
        assert_eq!(state.balls.len(), 5);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.target.color, Color::RED);

        for (ball, color) in state.balls.iter().zip(Color::DEFAULT_PALETTE) {
            assert_eq!(ball.color, color);
            assert_eq!(ball.radius, BALL_RADIUS);
            assert!(ball.pos.x >= SPAWN_PADDING && ball.pos.x <= 800.0 - SPAWN_PADDING);
            assert!(ball.pos.y >= SPAWN_PADDING && ball.pos.y <= 600.0 - SPAWN_PADDING);
        }
    }

    #[test]
    fn test_ids_are_unique_across_restarts() {
        let mut state = GameState::new(1, arena(), Settings::default());
        let first: Vec<u32> = state.balls.iter().map(|b| b.id).collect();
        state.restart(arena());
        assert!(state.balls.iter().all(|b| !first.contains(&b.id)));
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = GameState::new(77, arena(), Settings::default());
        let b = GameState::new(77, arena(), Settings::default());
        let c = GameState::new(78, arena(), Settings::default());
        let pos = |s: &GameState| s.balls.iter().map(|b| b.pos).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
        assert_ne!(pos(&a), pos(&c));
    }

    #[test]
    fn test_tiny_arena_spawns_at_padding() {
        let state = GameState::new(3, Rect::from_size(150.0, 150.0), Settings::default());
        for ball in &state.balls {
            assert_eq!(ball.pos, Vec2::new(SPAWN_PADDING, SPAWN_PADDING));
        }
    }

    #[test]
    fn test_remove_reassigns_target_to_live_color() {
        let mut state = GameState::new(5, arena(), Settings::default());
        let red = state.balls[0].id;
        state.remove_ball(red);

        assert_eq!(state.balls.len(), 4);
        assert!(state.balls.iter().any(|b| b.color == state.target.color));
        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::Absorbed { id: red, color: Color::RED });
        assert!(matches!(events[1], GameEvent::TargetColorChanged { .. }));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_last_removal_completes_once() {
        let settings = Settings {
            palette: vec![Color::GREEN],
            ..Default::default()
        };
        let mut state = GameState::new(5, arena(), settings);
        let id = state.balls[0].id;
        state.remove_ball(id);
        state.remove_ball(id);

        assert_eq!(state.phase, GamePhase::Complete);
        assert!(state.balls.is_empty());
        assert!(state.confetti_active());
        let completions = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::Completed)
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_restart_clears_confetti_and_reactivates() {
        let settings = Settings {
            palette: vec![Color::GREEN],
            ..Default::default()
        };
        let mut state = GameState::new(5, arena(), settings);
        let id = state.balls[0].id;
        state.remove_ball(id);
        assert!(!state.is_active());

        state.restart(Rect::from_size(1000.0, 1000.0));

        assert!(state.is_active());
        assert!(!state.confetti_active());
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.bounds.width(), 1000.0);
        assert_eq!(state.target.color, Color::GREEN);
    }

    #[test]
    fn test_pointer_ignored_when_complete() {
        let settings = Settings {
            palette: vec![Color::GREEN],
            ..Default::default()
        };
        let mut state = GameState::new(5, arena(), settings);
        let id = state.balls[0].id;
        state.remove_ball(id);

        let out = state.pointer(PointerEvent::press(Vec2::new(400.0, 300.0), 0.0));
        assert_eq!(out, TouchOutcome::Ignored);
    }

    #[test]
    fn test_snapshot_exposes_render_data() {
        let mut state = GameState::new(9, arena(), Settings::default());
        let pos = state.balls[2].pos;
        let expected = state.balls.iter().find(|b| b.contains_point(pos)).unwrap().id;
        state.pointer(PointerEvent::press(pos, 0.0));

        let snap = state.snapshot();
        assert_eq!(snap.balls.len(), 5);
        assert!(snap.active);
        assert!(!snap.confetti_active);
        assert_eq!(snap.target_color, Color::RED);
        let grabbed = snap.balls.iter().find(|b| b.touch_scale > 1.0).unwrap();
        assert_eq!(grabbed.id, expected);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("touch_scale"));
    }

    #[test]
    fn test_needs_redraw_tracks_motion_and_animation() {
        let mut state = GameState::new(9, arena(), Settings::default());
        assert!(!state.needs_redraw());

        state.balls[0].vel = Vec2::new(10.0, 0.0);
        assert!(state.needs_redraw());

        state.balls[0].vel = Vec2::ZERO;
        state.balls[1].start_touch_animation();
        assert!(state.needs_redraw());
    }
}
