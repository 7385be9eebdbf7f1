//! Value range and the value/angle mapping
//!
//! The knob's value lives in `[minimum, maximum]` and is mirrored by an angle
//! in `[-max_angle, +max_angle]` degrees. Both are stored and kept in sync on
//! every write; the mapping between them is affine and exactly invertible.

use thiserror::Error;

/// Errors raised when the value model is configured inconsistently
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValueError {
    #[error("invalid value range: minimum {minimum} must be below maximum {maximum}")]
    InvalidRange { minimum: f32, maximum: f32 },
    #[error("invalid max angle {0}: must be a positive number of degrees")]
    InvalidMaxAngle(f32),
}

/// Owns the knob's bounded value and its angular representation
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    minimum: f32,
    maximum: f32,
    default_value: f32,
    value: f32,
    angle: f32,
    max_angle: f32,
}

impl ValueModel {
    pub const DEFAULT_MINIMUM: f32 = 0.0;
    pub const DEFAULT_MAXIMUM: f32 = 1.0;
    pub const DEFAULT_VALUE: f32 = 0.5;
    pub const DEFAULT_MAX_ANGLE: f32 = 135.0;

    /// Creates a model with the given range, centered on the default value
    ///
    /// # Arguments
    /// * `minimum` - Lower bound of the value range
    /// * `maximum` - Upper bound, must be strictly greater than `minimum`
    /// * `max_angle` - Rotational travel to either side, in degrees
    ///
    /// # Returns
    /// The model with `value` set to the (clamped) default, or ValueError
    pub fn new(minimum: f32, maximum: f32, max_angle: f32) -> Result<Self, ValueError> {
        validate_range(minimum, maximum)?;
        validate_max_angle(max_angle)?;

        let mut model = Self {
            minimum,
            maximum,
            default_value: minimum + (maximum - minimum) / 2.0,
            value: minimum,
            angle: -max_angle,
            max_angle,
        };
        model.set_value(model.default_value);
        Ok(model)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn minimum_value(&self) -> f32 {
        self.minimum
    }

    pub fn maximum_value(&self) -> f32 {
        self.maximum
    }

    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    pub fn max_angle(&self) -> f32 {
        self.max_angle
    }

    /// Sets the value range and re-clamps the current value into it
    pub fn set_range(&mut self, minimum: f32, maximum: f32) -> Result<(), ValueError> {
        validate_range(minimum, maximum)?;
        self.minimum = minimum;
        self.maximum = maximum;
        self.set_value(self.value);
        Ok(())
    }

    /// Changes the rotational travel, keeping the value and re-deriving the angle
    pub fn set_max_angle(&mut self, max_angle: f32) -> Result<(), ValueError> {
        validate_max_angle(max_angle)?;
        self.max_angle = max_angle;
        self.set_value(self.value);
        Ok(())
    }

    /// Sets the value used by the reset gesture
    ///
    /// The default may lie outside the range; it is clamped when applied.
    pub fn set_default_value(&mut self, default_value: f32) {
        if default_value.is_finite() {
            self.default_value = default_value;
        }
    }

    /// The value a reset would produce, clamped into range
    pub fn reset_target(&self) -> f32 {
        self.clamp_value(self.default_value)
    }

    /// Clamps `value` into range and stores it together with its angle
    ///
    /// NaN is ignored so the range invariant can never be broken.
    ///
    /// # Returns
    /// The value actually stored
    pub fn set_value(&mut self, value: f32) -> f32 {
        if value.is_nan() {
            return self.value;
        }
        self.value = self.clamp_value(value);
        self.angle = self.angle_for_value(self.value);
        self.value
    }

    /// Clamps `angle` into `[-max_angle, max_angle]` and stores it with its value
    ///
    /// # Returns
    /// The angle actually stored
    pub fn set_angle(&mut self, angle: f32) -> f32 {
        if angle.is_nan() {
            return self.angle;
        }
        self.angle = angle.clamp(-self.max_angle, self.max_angle);
        self.value = self.clamp_value(self.value_for_angle(self.angle));
        self.angle
    }

    /// Maps a value to its angle in degrees
    pub fn angle_for_value(&self, value: f32) -> f32 {
        self.max_angle * (2.0 * (value - self.minimum) / (self.maximum - self.minimum) - 1.0)
    }

    /// Maps an angle in degrees to its value
    pub fn value_for_angle(&self, angle: f32) -> f32 {
        self.minimum + (angle / self.max_angle + 1.0) / 2.0 * (self.maximum - self.minimum)
    }

    fn clamp_value(&self, value: f32) -> f32 {
        value.clamp(self.minimum, self.maximum)
    }
}

impl Default for ValueModel {
    fn default() -> Self {
        Self {
            minimum: Self::DEFAULT_MINIMUM,
            maximum: Self::DEFAULT_MAXIMUM,
            default_value: Self::DEFAULT_VALUE,
            value: Self::DEFAULT_VALUE,
            angle: 0.0,
            max_angle: Self::DEFAULT_MAX_ANGLE,
        }
    }
}

pub(crate) fn validate_range(minimum: f32, maximum: f32) -> Result<(), ValueError> {
    if !minimum.is_finite() || !maximum.is_finite() || minimum >= maximum {
        return Err(ValueError::InvalidRange { minimum, maximum });
    }
    Ok(())
}

pub(crate) fn validate_max_angle(max_angle: f32) -> Result<(), ValueError> {
    if !max_angle.is_finite() || max_angle <= 0.0 {
        return Err(ValueError::InvalidMaxAngle(max_angle));
    }
    Ok(())
}
