//! Data-driven physics and layout constants
//!
//! Defaults match the built-in `consts`. The web build reads an optional JSON
//! override from the canvas `data-tuning` attribute; any subset of fields may
//! be given.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from parsing or validating a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gravity must be positive (got {0})")]
    Gravity(f32),
    #[error("jump impulse must be negative (got {0})")]
    JumpImpulse(f32),
    #[error("actor speed must be positive (got {0})")]
    Speed(f32),
    #[error("actor size must be positive (got {0}x{1})")]
    ActorSize(f32, f32),
    #[error("ground height must not be negative (got {0})")]
    GroundHeight(f32),
    #[error("start x must not be negative (got {0})")]
    StartX(f32),
}

/// Physics and layout tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a valid jump
    pub jump_impulse: f32,
    /// Horizontal pixels per tick per held key
    pub speed: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Actor x after a reset
    pub start_x: f32,
    /// Height of the ground band at the bottom of the surface
    pub ground_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            speed: ACTOR_SPEED,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            start_x: ACTOR_START_X,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation's invariants.
    ///
    /// Every field must be finite; JSON numbers past `f32::MAX` parse as infinity.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(TuningError::Gravity(self.gravity));
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(TuningError::JumpImpulse(self.jump_impulse));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(TuningError::Speed(self.speed));
        }
        let size_ok = self.actor_width.is_finite()
            && self.actor_height.is_finite()
            && self.actor_width > 0.0
            && self.actor_height > 0.0;
        if !size_ok {
            return Err(TuningError::ActorSize(self.actor_width, self.actor_height));
        }
        if !(self.ground_height.is_finite() && self.ground_height >= 0.0) {
            return Err(TuningError::GroundHeight(self.ground_height));
        }
        if !(self.start_x.is_finite() && self.start_x >= 0.0) {
            return Err(TuningError::StartX(self.start_x));
        }
        Ok(())
    }

    /// Load from an optional override, falling back to defaults on any error
    pub fn from_override(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override: {:?}", tuning);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "speed": 4 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.speed, 4.0);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.ground_height, GROUND_HEIGHT);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": -1 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Gravity(_)));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = Tuning::from_json(r#"{ "jump_impulse": 5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::JumpImpulse(_)));
    }

    #[test]
    fn test_rejects_overflowing_numbers() {
        let err = Tuning::from_json(r#"{ "speed": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Speed(v) if v.is_infinite()));

        let err = Tuning::from_json(r#"{ "jump_impulse": -1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::JumpImpulse(_)));

        let err = Tuning::from_json(r#"{ "gravity": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Gravity(_)));

        let err = Tuning::from_json(r#"{ "actor_height": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::ActorSize(_, _)));

        let err = Tuning::from_json(r#"{ "ground_height": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::GroundHeight(_)));
    }

    #[test]
    fn test_rejects_bad_start_x() {
        let err = Tuning::from_json(r#"{ "start_x": -5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::StartX(_)));

        let err = Tuning::from_json(r#"{ "start_x": 1e39 }"#).unwrap_err();
        assert!(matches!(err, TuningError::StartX(_)));

        assert!(Tuning::from_json(r#"{ "start_x": 0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_bad_override_falls_back_to_defaults() {
        assert_eq!(Tuning::from_override(Some("nope")), Tuning::default());
        assert_eq!(Tuning::from_override(None), Tuning::default());
    }
}
