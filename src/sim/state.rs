//! Level session state
//!
//! The whole game is one `GameState` value owned by the caller and passed to
//! [`super::tick`]. Nothing lives in globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::hole::Hole;
use super::obstacle::Obstacle;
use crate::levels::LevelSpec;
use crate::platform::PointerDrag;
use crate::settings::PhysicsConfig;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is live and can be shot when at rest
    Playing,
    /// Ball dropped in; frozen until the countdown ends
    Sinking { ticks_left: u32 },
    /// Every level cleared; ticking stops
    Won,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball was putted with this impulse
    Shot { impulse: Vec2, shots_taken: u32 },
    /// Ran out of shots and went back to spawn
    BallReset,
    /// Ball bounced off this many obstacles
    Collision { contacts: usize },
    /// Ball dropped into the hole
    Sunk { level: usize, shots: u32 },
    /// A level was (re)entered
    LevelStarted { level: usize },
    /// Last level cleared
    Won { total_shots: u32 },
    Paused,
    Resumed,
}

/// Live entities of the current level
#[derive(Debug, Clone)]
pub struct Level {
    pub ball: Ball,
    pub obstacles: Vec<Obstacle>,
    pub hole: Hole,
}

impl Level {
    /// Build brand-new entities from level data
    pub fn from_spec(spec: &LevelSpec) -> Self {
        Self {
            ball: spec.build_ball(),
            obstacles: spec.obstacles.iter().map(|o| o.build()).collect(),
            hole: spec.hole.build(),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Course data; never mutated
    levels: Vec<LevelSpec>,
    /// Index into `levels` of the level being played
    pub level_index: usize,
    pub level: Level,
    pub phase: GamePhase,
    /// While set, ticks do nothing
    pub paused: bool,
    pub drag: PointerDrag,
    pub config: PhysicsConfig,
    /// Simulation tick counter (unpaused ticks only)
    pub time_ticks: u64,
    /// Sum of tick durations, seconds
    pub elapsed_secs: f64,
    /// Shots across all cleared levels plus the current one
    pub total_shots: u32,
    /// Shots carried over from cleared levels
    banked_shots: u32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session at the first level.
    ///
    /// # Panics
    ///
    /// Panics if `levels` is empty. [`crate::levels::parse_levels`] never
    /// returns an empty list.
    pub fn new(levels: Vec<LevelSpec>, config: PhysicsConfig) -> Self {
        assert!(!levels.is_empty(), "a session needs at least one level");
        let level = Level::from_spec(&levels[0]);
        log::info!("Level 1/{} started", levels.len());

        Self {
            levels,
            level_index: 0,
            level,
            phase: GamePhase::Playing,
            paused: false,
            drag: PointerDrag::default(),
            config,
            time_ticks: 0,
            elapsed_secs: 0.0,
            total_shots: 0,
            banked_shots: 0,
            events: Vec::new(),
        }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Data for the level being played
    pub fn level_spec(&self) -> &LevelSpec {
        &self.levels[self.level_index]
    }

    /// Move on to the next level, or finish the game after the last one
    pub fn advance_level(&mut self) {
        self.banked_shots = self.total_shots;

        if self.level_index + 1 >= self.levels.len() {
            self.phase = GamePhase::Won;
            self.drag.cancel();
            log::info!("Course complete in {} shots", self.total_shots);
            self.events.push(GameEvent::Won {
                total_shots: self.total_shots,
            });
            return;
        }

        self.level_index += 1;
        self.enter_level();
    }

    /// Replay the current level with fresh entities. From `Won` this starts
    /// the course over.
    pub fn restart_level(&mut self) {
        if self.phase == GamePhase::Won {
            self.level_index = 0;
            self.banked_shots = 0;
        }
        self.total_shots = self.banked_shots;
        self.enter_level();
    }

    fn enter_level(&mut self) {
        self.level = Level::from_spec(&self.levels[self.level_index]);
        self.phase = GamePhase::Playing;
        self.drag.cancel();
        log::info!("Level {}/{} started", self.level_index + 1, self.levels.len());
        self.events.push(GameEvent::LevelStarted {
            level: self.level_index,
        });
    }

    /// Count a shot taken on the current level
    pub(super) fn record_shot(&mut self) {
        self.total_shots += 1;
    }
}
