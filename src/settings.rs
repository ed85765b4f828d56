//! Game settings and physics tuning
//!
//! Everything the physics core reads is collected in [`PhysicsConfig`] so a
//! level session carries its own copy. Defaults reproduce the shipped feel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How rolling friction is applied each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DampingModel {
    /// Constant factor every tick
    #[default]
    Flat,
    /// Factor grows with speed (`damping + |v| / 1000`), capped at
    /// [`MAX_SPEED_SCALED_DAMPING`]; fast shots roll much further
    SpeedScaled,
}

impl DampingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DampingModel::Flat => "Flat",
            DampingModel::SpeedScaled => "SpeedScaled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(DampingModel::Flat),
            "speedscaled" | "speed_scaled" | "speed" => Some(DampingModel::SpeedScaled),
            _ => None,
        }
    }
}

/// Physics constants. Per tick, not per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fraction of acceleration kept each tick
    pub accel_decay: f32,
    /// Base velocity damping factor
    pub damping: f32,
    pub damping_model: DampingModel,
    /// Energy kept on a world-edge bounce
    pub wall_bounce: f32,
    /// Speed below which the ball is at rest
    pub rest_speed: f32,
    pub impulse_accel_divisor: f32,
    pub impulse_velocity_scale: f32,
    /// World bounds; the ball is kept inside `[0, world_size]`
    pub world_size: Vec2,
    /// Ticks spent sinking before the next level loads
    pub sink_delay_ticks: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            accel_decay: ACCEL_DECAY,
            damping: DAMPING,
            damping_model: DampingModel::Flat,
            wall_bounce: WALL_BOUNCE,
            rest_speed: REST_SPEED,
            impulse_accel_divisor: IMPULSE_ACCEL_DIVISOR,
            impulse_velocity_scale: IMPULSE_VELOCITY_SCALE,
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            sink_delay_ticks: SINK_DELAY_TICKS,
        }
    }
}

impl PhysicsConfig {
    /// Damping factor to apply to a ball moving at `vel`
    #[inline]
    pub fn damping_factor(&self, vel: Vec2) -> f32 {
        match self.damping_model {
            DampingModel::Flat => self.damping,
            DampingModel::SpeedScaled => {
                let factor = self.damping + vel.length() / DAMPING_SPEED_DIVISOR;
                factor.min(MAX_SPEED_SCALED_DAMPING.max(self.damping))
            }
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsConfig,
    /// Pause when the window loses focus, resume when it regains it
    pub auto_pause_on_blur: bool,
    /// Draw the slingshot line while dragging
    pub show_aim_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            auto_pause_on_blur: true,
            show_aim_line: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mini_golf_settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a settings override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
