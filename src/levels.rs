//! Level data
//!
//! Levels are plain data (`LevelSpec`) parsed from JSON. Live entities are
//! built from its `LevelSpec` every time a level is entered, see
//! [`crate::sim::Level::from_spec`].

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Ball, Hole, Obstacle};

/// Levels shipped with the game
const DEFAULT_LEVELS_JSON: &str = include_str!("levels.json");

/// Geometry of one obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    /// Radians
    #[serde(default)]
    pub rotation: f32,
}

impl ObstacleSpec {
    pub fn build(&self) -> Obstacle {
        Obstacle::new(self.center, self.width, self.height, self.rotation)
    }
}

/// Geometry of the hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub center: Vec2,
    pub radius: f32,
}

impl HoleSpec {
    pub fn build(&self) -> Hole {
        Hole::new(self.center, self.radius)
    }
}

/// One level: where the ball starts, what is in the way, where it must go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    #[serde(default)]
    pub name: String,
    pub spawn: Vec2,
    pub ball_radius: f32,
    /// `None` = unlimited
    #[serde(default)]
    pub max_shots: Option<u32>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    pub hole: HoleSpec,
}

impl LevelSpec {
    pub fn build_ball(&self) -> Ball {
        Ball::new(self.spawn, self.ball_radius, self.max_shots)
    }

    fn validate(&self, index: usize) -> Result<(), LevelError> {
        let invalid = |reason: &'static str| LevelError::InvalidGeometry { level: index, reason };

        if !(self.ball_radius > 0.0) {
            return Err(invalid("ball radius must be positive"));
        }
        if !(self.hole.radius > 0.0) {
            return Err(invalid("hole radius must be positive"));
        }
        if self
            .obstacles
            .iter()
            .any(|o| !(o.width > 0.0 && o.height > 0.0))
        {
            return Err(invalid("obstacle extents must be positive"));
        }
        Ok(())
    }
}

/// Errors loading level data
#[derive(Debug)]
pub enum LevelError {
    /// Not valid level JSON
    Parse(serde_json::Error),
    /// The list contains no levels
    Empty,
    /// A level has a degenerate shape
    InvalidGeometry { level: usize, reason: &'static str },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Parse(e) => write!(f, "failed to parse level data: {}", e),
            LevelError::Empty => write!(f, "level data contains no levels"),
            LevelError::InvalidGeometry { level, reason } => {
                write!(f, "level {}: {}", level + 1, reason)
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Parse(e)
    }
}

/// Parse and validate a JSON array of levels
pub fn parse_levels(json: &str) -> Result<Vec<LevelSpec>, LevelError> {
    let levels: Vec<LevelSpec> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(LevelError::Empty);
    }
    for (i, level) in levels.iter().enumerate() {
        level.validate(i)?;
    }
    Ok(levels)
}

/// The built-in course
pub fn default_levels() -> Vec<LevelSpec> {
    match parse_levels(DEFAULT_LEVELS_JSON) {
        Ok(levels) => levels,
        Err(e) => {
            // Only reachable if levels.json is edited into a broken state
            log::error!("Built-in levels are invalid: {}", e);
            Vec::new()
        }
    }
}
