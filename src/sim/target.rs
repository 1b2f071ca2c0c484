//! Target zone: the color slot balls are guided into
//!
//! A matching ball inside the attraction radius (half the zone width) is
//! pulled toward the center. Once its center is closer than its own radius
//! it is captured, and while captured and within a quarter zone width it
//! shrinks every frame until it is small enough to remove.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geom::{Color, Rect};
use crate::consts::*;
use crate::direction_to;

/// Outcome of one frame of target-zone processing for a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorption {
    /// Not affected this frame
    None,
    /// Captured, still shrinking
    Absorbing,
    /// Shrunk below the removal radius
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetZone {
    pub rect: Rect,
    /// Color the next ball must have
    pub color: Color,
}

impl TargetZone {
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn attraction_radius(&self) -> f32 {
        self.rect.width() / 2.0
    }

    /// Radius around the center inside which captured balls shrink
    #[inline]
    pub fn shrink_radius(&self) -> f32 {
        self.rect.width() / 4.0
    }

    pub fn matches(&self, ball: &Ball) -> bool {
        ball.color == self.color
    }

    /// Pull a matching ball toward the center; true if it is captured
    pub fn attract(&self, ball: &mut Ball) -> bool {
        if !self.matches(ball) {
            return false;
        }
        let center = self.center();
        let distance = ball.pos.distance(center);
        let reach = self.attraction_radius();
        if distance >= reach {
            return false;
        }

        let strength = ATTRACTION_FORCE * (1.0 - distance / reach);
        ball.vel += direction_to(ball.pos, center) * strength;

        distance < ball.radius
    }

    /// Run attraction, capture and shrink for one frame
    ///
    /// A capture holds until the ball leaves the attraction radius or is
    /// picked up again.
    pub fn absorb(&self, ball: &mut Ball) -> Absorption {
        if ball.absorbing && ball.pos.distance(self.center()) >= self.attraction_radius() {
            ball.absorbing = false;
        }
        if self.attract(ball) {
            ball.absorbing = true;
            ball.vel *= CAPTURE_DRAG;
        }
        if !ball.absorbing || !self.matches(ball) {
            return Absorption::None;
        }

        if ball.pos.distance(self.center()) < self.shrink_radius() {
            ball.radius *= ABSORB_SHRINK;
            if ball.radius < REMOVAL_RADIUS {
                return Absorption::Finished;
            }
        }
        Absorption::Absorbing
    }

    /// Extra inward push for a matching ball dropped within one zone width
    pub fn release_assist(&self, ball: &mut Ball) -> bool {
        if !self.matches(ball) {
            return false;
        }
        let center = self.center();
        let distance = ball.pos.distance(center);
        let reach = self.rect.width();
        if distance >= reach {
            return false;
        }
        let strength = RELEASE_ASSIST_FORCE * (1.0 - distance / reach);
        ball.vel += direction_to(ball.pos, center) * strength;
        true
    }
}

impl Default for TargetZone {
    fn default() -> Self {
        Self::new(Rect::new(50.0, 50.0, 250.0, 150.0), Color::DEFAULT_PALETTE[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> TargetZone {
        TargetZone::default()
    }

    fn ball_at(x: f32, y: f32, color: Color) -> Ball {
        Ball::new(1, Vec2::new(x, y), BALL_RADIUS, color)
    }

    #[test]
    fn test_zone_geometry() {
        let z = zone();
        assert_eq!(z.center(), Vec2::new(150.0, 100.0));
        assert_eq!(z.attraction_radius(), 100.0);
        assert_eq!(z.shrink_radius(), 50.0);
    }

    #[test]
    fn test_outside_attraction_radius_is_untouched() {
        let z = zone();
        let mut ball = ball_at(260.0, 100.0, z.color);
        assert!(!z.attract(&mut ball));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_wrong_color_is_untouched() {
        let z = zone();
        let mut ball = ball_at(160.0, 100.0, Color::BLUE);
        assert!(!z.attract(&mut ball));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(z.absorb(&mut ball), Absorption::None);
    }

    #[test]
    fn test_pull_points_to_center_and_fades_with_distance() {
        let z = zone();
        let mut near = ball_at(200.0, 100.0, z.color);
        let mut far = ball_at(240.0, 100.0, z.color);

        // 50 units out of 100: half strength, not captured (50 > 40)
        assert!(!z.attract(&mut near));
        z.attract(&mut far);

        assert!((near.vel.x + ATTRACTION_FORCE * 0.5).abs() < 1e-3);
        assert_eq!(near.vel.y, 0.0);
        assert!(far.vel.x < 0.0 && far.vel.x > near.vel.x);
    }

    #[test]
    fn test_capture_when_closer_than_radius() {
        let z = zone();
        let mut ball = ball_at(170.0, 100.0, z.color);
        assert!(z.attract(&mut ball));
    }

    #[test]
    fn test_absorption_shrinks_monotonically_until_finished() {
        let z = zone();
        let mut ball = ball_at(150.0, 100.0, z.color);

        let mut last_radius = ball.radius;
        let mut frames = 0;
        loop {
            let outcome = z.absorb(&mut ball);
            assert!(ball.radius <= last_radius);
            last_radius = ball.radius;
            frames += 1;
            if outcome == Absorption::Finished {
                break;
            }
            assert_eq!(outcome, Absorption::Absorbing);
            assert!(frames < 200, "ball never finished absorbing");
        }
        assert!(ball.radius < REMOVAL_RADIUS);
        // 40 * 0.95^n < 2
        assert_eq!(frames, 59);
    }

    #[test]
    fn test_captured_ball_outside_shrink_radius_keeps_size() {
        let z = zone();
        let mut ball = ball_at(150.0, 100.0, z.color);
        assert_eq!(z.absorb(&mut ball), Absorption::Absorbing);
        let radius = ball.radius;

        // Knocked out of the inner circle by a collision
        ball.pos = Vec2::new(150.0, 100.0 + z.shrink_radius() + 5.0);
        ball.vel = Vec2::ZERO;
        assert_eq!(z.absorb(&mut ball), Absorption::Absorbing);
        assert_eq!(ball.radius, radius);
    }

    #[test]
    fn test_capture_ends_when_ball_leaves_attraction_radius() {
        let z = zone();
        let mut ball = ball_at(150.0, 100.0, z.color);
        z.absorb(&mut ball);
        assert!(ball.absorbing);

        ball.pos = Vec2::new(150.0 + z.attraction_radius() + 20.0, 100.0);
        assert_eq!(z.absorb(&mut ball), Absorption::None);
        assert!(!ball.absorbing);

        // Back inside the shrink radius but not recaptured (45 > 38)
        let radius = ball.radius;
        ball.pos = Vec2::new(195.0, 100.0);
        ball.vel = Vec2::ZERO;
        assert_eq!(z.absorb(&mut ball), Absorption::None);
        assert_eq!(ball.radius, radius);
    }

    #[test]
    fn test_release_assist_range() {
        let z = zone();
        let mut inside = ball_at(250.0, 100.0, z.color);
        assert!(z.release_assist(&mut inside));
        assert!((inside.vel.x + RELEASE_ASSIST_FORCE * 0.5).abs() < 1e-3);

        let mut outside = ball_at(360.0, 100.0, z.color);
        assert!(!z.release_assist(&mut outside));
        assert_eq!(outside.vel, Vec2::ZERO);

        let mut wrong = ball_at(250.0, 100.0, Color::GREEN);
        assert!(!z.release_assist(&mut wrong));
    }
}
