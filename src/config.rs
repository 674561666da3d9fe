//! Game configuration loading and validation.
//!
//! [`GameConfig`] is read from JSON; every section and field falls back to
//! the defaults in [`crate::constants`]. Companion distances are authored in
//! pixels and converted into a [`Tuning`] once the host's unit scale is known.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ATTACK_DELAY, CHASE_HYSTERESIS, CHASE_RADIUS, COMPANION_SPEED, HIT_DISPLACEMENT, IDLE_RADIUS,
    KNOCKBACK_SPEED_FACTOR, MAX_LIFE, OWNER_MAX_X, OWNER_MAX_Y, OWNER_SPEED,
};
use crate::session::GameSettings;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The host reported a unit scale that is not a positive finite number.
    #[error("unit scale must be positive and finite, got {0}")]
    InvalidUnitScale(f32),
    /// A tunable is out of its valid domain.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// What the field must satisfy.
        reason: &'static str,
    },
}

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Companion tunables.
    pub companion: CompanionConfig,
    /// Owner tunables.
    pub owner: OwnerConfig,
    /// Initial player settings.
    pub settings: GameSettings,
}

impl GameConfig {
    /// Parses a configuration document from a JSON string.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or a validation error
    /// from [`GameConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`GameConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns the first [`ConfigError::InvalidValue`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.companion.validate()?;
        self.owner.validate()
    }
}

/// Companion tunables as authored, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Movement speed, pixels per second.
    pub speed: f32,
    /// Owner distance below which the companion idles.
    pub idle_radius: f32,
    /// Perception radius for hostiles.
    pub chase_radius: f32,
    /// Knockback distance after a hit.
    pub hit_displacement: f32,
    /// Hits survived before dying.
    pub max_life: u32,
    /// Seconds spent attacking before returning to idle.
    pub attack_delay: f32,
    /// Knockback speed as a multiple of `speed`.
    pub knockback_speed_factor: f32,
    /// Extra world units tolerated beyond the chase radius. Not scaled.
    pub chase_hysteresis: f32,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            speed: COMPANION_SPEED,
            idle_radius: IDLE_RADIUS,
            chase_radius: CHASE_RADIUS,
            hit_displacement: HIT_DISPLACEMENT,
            max_life: MAX_LIFE,
            attack_delay: ATTACK_DELAY,
            knockback_speed_factor: KNOCKBACK_SPEED_FACTOR,
            chase_hysteresis: CHASE_HYSTERESIS,
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: "must be finite and non-negative",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: "must be finite and positive",
        })
    }
}

impl CompanionConfig {
    /// Checks every tunable against its domain.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("companion.speed", self.speed)?;
        non_negative("companion.idle_radius", self.idle_radius)?;
        non_negative("companion.chase_radius", self.chase_radius)?;
        non_negative("companion.hit_displacement", self.hit_displacement)?;
        non_negative("companion.attack_delay", self.attack_delay)?;
        positive("companion.knockback_speed_factor", self.knockback_speed_factor)?;
        non_negative("companion.chase_hysteresis", self.chase_hysteresis)?;
        if self.max_life == 0 {
            return Err(ConfigError::InvalidValue {
                field: "companion.max_life",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Converts the pixel-based tunables into world units.
    ///
    /// Speed, both radii and the hit displacement are multiplied by
    /// `unit_scale`; the rest are copied.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidUnitScale`] for a non-positive or
    /// non-finite scale, or a validation error for a bad tunable.
    pub fn scaled(&self, unit_scale: f32) -> Result<Tuning, ConfigError> {
        if !(unit_scale.is_finite() && unit_scale > 0.0) {
            return Err(ConfigError::InvalidUnitScale(unit_scale));
        }
        self.validate()?;
        Ok(Tuning {
            speed: self.speed * unit_scale,
            idle_radius: self.idle_radius * unit_scale,
            chase_radius: self.chase_radius * unit_scale,
            hit_displacement: self.hit_displacement * unit_scale,
            max_life: self.max_life,
            attack_delay: self.attack_delay,
            knockback_speed_factor: self.knockback_speed_factor,
            chase_hysteresis: self.chase_hysteresis,
        })
    }
}

/// Companion tunables in world units, fixed for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Movement speed, units per second.
    pub speed: f32,
    /// Owner distance below which the companion idles.
    pub idle_radius: f32,
    /// Perception radius for hostiles.
    pub chase_radius: f32,
    /// Knockback distance after a hit.
    pub hit_displacement: f32,
    /// Hits survived before dying.
    pub max_life: u32,
    /// Seconds spent attacking.
    pub attack_delay: f32,
    /// Knockback speed as a multiple of `speed`.
    pub knockback_speed_factor: f32,
    /// Extra units tolerated beyond the chase radius.
    pub chase_hysteresis: f32,
}

/// Owner tunables in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    /// Movement speed, units per second.
    pub speed: f32,
    /// Horizontal bound; the owner stays within `[-max_x, max_x]`.
    pub max_x: f32,
    /// Vertical bound; the owner stays within `[-max_y, max_y]`.
    pub max_y: f32,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            speed: OWNER_SPEED,
            max_x: OWNER_MAX_X,
            max_y: OWNER_MAX_Y,
        }
    }
}

impl OwnerConfig {
    /// Checks the owner tunables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("owner.speed", self.speed)?;
        non_negative("owner.max_x", self.max_x)?;
        non_negative("owner.max_y", self.max_y)
    }
}
