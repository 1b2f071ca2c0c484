//! Game settings
//!
//! Loaded from a JSON file by the native driver; every field falls back to
//! its default when missing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Color, Rect};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// One ball is spawned per entry, in order
    pub palette: Vec<Color>,
    /// Starting radius of every ball
    pub ball_radius: f32,
    /// Keep spawn positions this far from the arena edges
    pub spawn_padding: f32,
    /// The target slot
    pub target_rect: Rect,
    /// Spawn a confetti burst when the last ball is absorbed
    pub confetti: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Color::DEFAULT_PALETTE.to_vec(),
            ball_radius: BALL_RADIUS,
            spawn_padding: SPAWN_PADDING,
            target_rect: Rect::new(50.0, 50.0, 250.0, 150.0),
            confetti: true,
        }
    }
}

impl Settings {
    /// Reject settings the simulation cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            bail!("palette must contain at least one color");
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            bail!("ball_radius must be positive, got {}", self.ball_radius);
        }
        if !(self.spawn_padding.is_finite() && self.spawn_padding >= 0.0) {
            bail!("spawn_padding must be non-negative, got {}", self.spawn_padding);
        }
        let r = &self.target_rect;
        if !(r.left <= r.right && r.top <= r.bottom) || r.width() <= 0.0 {
            bail!("target_rect is empty or inverted: {r:?}");
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("parsing settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
