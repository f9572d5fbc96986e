//! Game configuration: playfield size, physics constants and spawn policy.
//!
//! Every field has a default taken from the classic browser version of the
//! game, so a JSON file only needs the values it wants to change.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Physics tick interval in milliseconds (~60 FPS).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// When the obstacle generator emits a new obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn every `frames` simulation steps.
    Interval { frames: u64 },
    /// Spawn once the newest obstacle has scrolled `threshold` units in from
    /// the right edge, or when no obstacle is active.
    Distance { threshold: f64 },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self::Interval { frames: 90 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in world units.
    pub field_width: f64,
    /// Playfield height in world units. y = 0 is the ceiling.
    pub field_height: f64,

    /// Added to the player's velocity every step (positive = downward).
    pub gravity: f64,
    /// Velocity a flap sets, overriding the current one.
    pub jump_velocity: f64,

    pub player_x: f64,
    pub player_radius: f64,

    pub obstacle_width: f64,
    /// Vertical opening between the top and bottom segments.
    pub gap: f64,
    /// Minimum height of either segment, keeps gaps off the field edges.
    pub min_segment: f64,
    /// Units an obstacle moves left per step.
    pub scroll_speed: f64,
    /// New obstacles appear this far past the right edge.
    pub spawn_offset: f64,
    /// Obstacles are dropped once their trailing edge is this far left of 0.
    pub prune_margin: f64,
    pub spawn: SpawnPolicy,

    /// Wall-clock length of one simulation step.
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 480.0,
            field_height: 640.0,
            gravity: 0.5,
            jump_velocity: -8.0,
            player_x: 90.0,
            player_radius: 14.0,
            obstacle_width: 60.0,
            gap: 150.0,
            min_segment: 60.0,
            scroll_speed: 2.5,
            spawn_offset: 10.0,
            prune_margin: 20.0,
            spawn: SpawnPolicy::default(),
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

fn ensure(ok: bool, field: &'static str, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, reason))
    }
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate config JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Vertical start position of the player: the middle of the field.
    pub fn start_y(&self) -> f64 {
        self.field_height / 2.0
    }

    /// Horizontal distance between two consecutive obstacles at the moment
    /// the second one spawns. For the distance policy this is a lower bound.
    pub fn spawn_spacing(&self) -> f64 {
        match self.spawn {
            SpawnPolicy::Interval { frames } => frames as f64 * self.scroll_speed,
            SpawnPolicy::Distance { threshold } => threshold + self.spawn_offset,
        }
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("player_x", self.player_x),
            ("player_radius", self.player_radius),
            ("obstacle_width", self.obstacle_width),
            ("gap", self.gap),
            ("min_segment", self.min_segment),
            ("scroll_speed", self.scroll_speed),
            ("spawn_offset", self.spawn_offset),
            ("prune_margin", self.prune_margin),
        ];
        for (field, value) in finite {
            ensure(value.is_finite(), field, "must be a finite number")?;
        }

        ensure(self.field_width > 0.0, "field_width", "must be positive")?;
        ensure(self.field_height > 0.0, "field_height", "must be positive")?;
        ensure(self.gravity > 0.0, "gravity", "must be positive (downward)")?;
        ensure(
            self.jump_velocity < 0.0,
            "jump_velocity",
            "must be negative (upward)",
        )?;
        ensure(self.player_radius > 0.0, "player_radius", "must be positive")?;
        ensure(
            self.player_x - self.player_radius >= 0.0
                && self.player_x + self.player_radius <= self.field_width,
            "player_x",
            "player must fit inside the field horizontally",
        )?;
        ensure(self.obstacle_width > 0.0, "obstacle_width", "must be positive")?;
        ensure(
            self.gap > 2.0 * self.player_radius,
            "gap",
            "must be wider than the player",
        )?;
        ensure(self.min_segment >= 0.0, "min_segment", "must not be negative")?;
        ensure(
            2.0 * self.min_segment + self.gap <= self.field_height,
            "gap",
            "gap plus both minimum segments must fit in the field height",
        )?;
        ensure(self.scroll_speed > 0.0, "scroll_speed", "must be positive")?;
        ensure(self.spawn_offset >= 0.0, "spawn_offset", "must not be negative")?;
        ensure(self.prune_margin >= 0.0, "prune_margin", "must not be negative")?;
        ensure(self.frame_ms > 0, "frame_ms", "must be at least 1")?;

        match self.spawn {
            SpawnPolicy::Interval { frames } => {
                ensure(frames > 0, "spawn", "interval must be at least one frame")?;
            }
            SpawnPolicy::Distance { threshold } => {
                ensure(
                    threshold.is_finite() && threshold > 0.0,
                    "spawn",
                    "distance threshold must be positive",
                )?;
            }
        }
        ensure(
            self.spawn_spacing() > self.obstacle_width,
            "spawn",
            "obstacles would overlap: spacing must exceed obstacle_width",
        )?;

        Ok(())
    }
}
