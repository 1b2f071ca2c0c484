//! Axis-aligned rectangles and opaque ball colors
//!
//! Screen-style coordinates: x grows right, y grows down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (arena bounds, target zone)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        assert!(
            left <= right && top <= bottom,
            "inverted rect ({left}, {top}, {right}, {bottom})"
        );
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin (arena of a given size)
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Point at fractional coordinates (0,0 = top-left, 1,1 = bottom-right)
    pub fn lerp_point(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(
            self.left + self.width() * fx,
            self.top + self.height() * fy,
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Opaque ball color (packed ARGB, only ever compared for equality)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const RED: Color = Color(0xFFFF0000);
    pub const BLUE: Color = Color(0xFF0000FF);
    pub const GREEN: Color = Color(0xFF00FF00);
    pub const YELLOW: Color = Color(0xFFFFFF00);
    pub const MAGENTA: Color = Color(0xFFFF00FF);
    pub const CYAN: Color = Color(0xFF00FFFF);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const GOLD: Color = Color(0xFFFFD700);
    pub const HOT_PINK: Color = Color(0xFFFF69B4);
    pub const SPRING_GREEN: Color = Color(0xFF00FF7F);
    pub const ORANGE_RED: Color = Color(0xFFFF4500);

    /// The five ball colors, in spawn order
    pub const DEFAULT_PALETTE: [Color; 5] = [
        Color::RED,
        Color::BLUE,
        Color::GREEN,
        Color::YELLOW,
        Color::MAGENTA,
    ];

    /// Colors used for the completion confetti burst
    pub const CONFETTI_PALETTE: [Color; 11] = [
        Color::RED,
        Color::BLUE,
        Color::GREEN,
        Color::YELLOW,
        Color::MAGENTA,
        Color::CYAN,
        Color::WHITE,
        Color::GOLD,
        Color::HOT_PINK,
        Color::SPRING_GREEN,
        Color::ORANGE_RED,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_metrics() {
        let r = Rect::new(50.0, 50.0, 250.0, 150.0);
        assert_eq!(r.width(), 200.0);
        assert_eq!(r.height(), 100.0);
        assert_eq!(r.center(), Vec2::new(150.0, 100.0));
        assert_eq!(r.lerp_point(0.25, 0.5), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::from_size(10.0, 10.0);
        assert!(r.contains(Vec2::ZERO));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
    }

    #[test]
    #[should_panic]
    fn test_rect_rejects_inverted() {
        let _ = Rect::new(10.0, 0.0, 0.0, 10.0);
    }

    #[test]
    fn test_color_serializes_as_number() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "4294901760");
    }
}
