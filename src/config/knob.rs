use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::interaction::InteractionStyle;
use crate::domain::value::{ValueError, validate_max_angle, validate_range};

/// Owner-facing configuration of a rotary knob
///
/// Every field has a default, so a TOML file only needs to name the settings
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    pub interaction_style: InteractionStyle,
    /// Points of movement per degree of rotation in the slider styles
    pub scaling_factor: f32,
    pub resets_to_default: bool,
    /// Notify on every move (true) or only on release (false)
    pub continuous: bool,
    /// Admit touches inside the knob circle instead of the bounding rectangle
    pub circular_touch_zone: bool,
    pub min_required_distance_from_knob_center: f32,
    pub minimum_value: f32,
    pub maximum_value: f32,
    pub default_value: f32,
    pub max_angle: f32,
    /// Duration of animated value changes, including the reset animation
    pub animation_duration_ms: u64,
    /// Whether the double-tap reset animates or jumps
    pub animated_reset: bool,
}

impl KnobConfig {
    pub const DEFAULT_SCALING_FACTOR: f32 = 1.0;
    pub const DEFAULT_MIN_DISTANCE: f32 = 4.0;
    pub const DEFAULT_ANIMATION_MS: u64 = 200;

    /// Parses a TOML document and validates the result
    pub fn from_toml_str(source: &str) -> Result<Self, KnobConfigError> {
        let config: KnobConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every setting the engine divides by or clamps against
    pub fn validate(&self) -> Result<(), KnobConfigError> {
        validate_range(self.minimum_value, self.maximum_value)?;
        validate_max_angle(self.max_angle)?;

        if !self.default_value.is_finite() {
            return Err(KnobConfigError::InvalidDefaultValue(self.default_value));
        }

        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return Err(KnobConfigError::InvalidScalingFactor(self.scaling_factor));
        }

        let distance = self.min_required_distance_from_knob_center;
        if !distance.is_finite() || distance < 0.0 {
            return Err(KnobConfigError::InvalidTouchDistance(distance));
        }

        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            interaction_style: InteractionStyle::Rotating,
            scaling_factor: Self::DEFAULT_SCALING_FACTOR,
            resets_to_default: true,
            continuous: true,
            circular_touch_zone: false,
            min_required_distance_from_knob_center: Self::DEFAULT_MIN_DISTANCE,
            minimum_value: 0.0,
            maximum_value: 1.0,
            default_value: 0.5,
            max_angle: 135.0,
            animation_duration_ms: Self::DEFAULT_ANIMATION_MS,
            animated_reset: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum KnobConfigError {
    #[error(transparent)]
    InvalidValue(#[from] ValueError),
    #[error("Default value {0} must be a finite number")]
    InvalidDefaultValue(f32),
    #[error("Scaling factor {0} must be a positive number of points per degree")]
    InvalidScalingFactor(f32),
    #[error("Minimum touch distance {0} must be a non-negative number of points")]
    InvalidTouchDistance(f32),
    #[error("Failed to parse knob configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
