//! Mini Golf - drag-to-putt 2D golf with a small rigid-body physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball integration, collisions, level session)
//! - `render`: Canvas abstraction and per-entity draw calls
//! - `platform`: Browser/native input plumbing
//! - `levels`: Level data (embedded JSON)
//! - `settings`: Physics tuning and preferences

pub mod levels;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use levels::{LevelError, LevelSpec, default_levels, parse_levels};
pub use settings::{DampingModel, PhysicsConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate. Damping and decay are per tick, not per second,
    /// so the game only plays right near this rate.
    pub const TICK_HZ: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Cap on catch-up ticks per rendered frame
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical drawing surface (canvas pixels)
    pub const WORLD_WIDTH: f32 = 1600.0;
    pub const WORLD_HEIGHT: f32 = 900.0;

    /// Fraction of acceleration kept each tick (impulse dissipation)
    pub const ACCEL_DECAY: f32 = 0.5;
    /// Flat velocity damping per tick (rolling friction)
    pub const DAMPING: f32 = 0.975;
    /// Speed divisor for the speed-scaled damping model
    pub const DAMPING_SPEED_DIVISOR: f32 = 1000.0;
    /// Upper bound on the speed-scaled factor; must stay below 1 or shots
    /// accelerate without limit
    pub const MAX_SPEED_SCALED_DAMPING: f32 = 0.995;
    /// Energy kept when bouncing off a world edge
    pub const WALL_BOUNCE: f32 = 0.975;
    /// Below this speed the ball counts as at rest and can be shot again
    pub const REST_SPEED: f32 = 1.0;

    /// Shot impulse -> acceleration divisor
    pub const IMPULSE_ACCEL_DIVISOR: f32 = 100.0;
    /// Shot impulse -> velocity scale
    pub const IMPULSE_VELOCITY_SCALE: f32 = 5.0;

    /// Ticks between the ball dropping in and the next level (1 second)
    pub const SINK_DELAY_TICKS: u32 = TICK_HZ;
}
