use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::errors::{ResourceError, Result};

/// Texture names handed to effect objects, resolved by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTextures {
    pub explosion: String,
    pub explosion_ir: String,
    pub splash: String,
    pub smoke_light: String,
    pub smoke_medium: String,
    pub smoke_dark: String,
}

impl Default for EffectTextures {
    fn default() -> Self {
        Self {
            explosion: "sar_explosion".to_string(),
            explosion_ir: "sar_explosion_ir".to_string(),
            splash: "sar_splash".to_string(),
            smoke_light: "sar_smoke_light".to_string(),
            smoke_medium: "sar_smoke_medium".to_string(),
            smoke_dark: "sar_smoke_dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Play landing and crash sounds
    pub event_sounds: bool,
    /// Explosion animation frame interval [ms]
    pub explosion_frame_interval_ms: u64,
    /// Splash animation frame interval [ms]
    pub splash_frame_interval_ms: u64,
    /// How long crash explosions and their smoke last [ms]
    pub crash_explosion_life_span_ms: u64,
    /// Initial IR temperature of new objects [0, 1]
    pub default_temperature: f64,
    /// How long a posted message stays on screen [ms]
    pub message_display_ms: u64,
    pub textures: EffectTextures,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            event_sounds: true,
            explosion_frame_interval_ms: 500,
            splash_frame_interval_ms: 600,
            crash_explosion_life_span_ms: 60_000,
            default_temperature: crate::utils::DEFAULT_TEMPERATURE,
            message_display_ms: 5_000,
            textures: EffectTextures::default(),
        }
    }
}

impl CoreConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Clamp frame intervals to at least 1 ms and reject out of range temperatures
    pub fn validate(mut self) -> Result<Self> {
        if self.explosion_frame_interval_ms < 1 {
            warn!("Explosion frame interval must be at least 1 ms, clamping");
            self.explosion_frame_interval_ms = 1;
        }
        if self.splash_frame_interval_ms < 1 {
            warn!("Splash frame interval must be at least 1 ms, clamping");
            self.splash_frame_interval_ms = 1;
        }
        if !(0.0..=1.0).contains(&self.default_temperature) {
            return Err(ResourceError::Config(format!(
                "default_temperature {} outside [0, 1]",
                self.default_temperature
            )));
        }
        Ok(self)
    }
}
