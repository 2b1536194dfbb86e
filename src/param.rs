//! Bounded numeric parameters backing the range sliders.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RangeParam {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("min {min} is greater than max {max}")]
    Inverted { min: f64, max: f64 },

    #[error("step must be positive, got {0}")]
    Step(f64),

    #[error("default {default} lies outside [{min}, {max}]")]
    DefaultOutside { default: f64, min: f64, max: f64 },
}

impl RangeParam {
    /// Pattern size in pixels.
    pub const SIZE: RangeParam = RangeParam {
        min: 30.0,
        max: 300.0,
        step: 1.0,
        default: 120.0,
    };

    /// Animation speed multiplier.
    pub const SPEED: RangeParam = RangeParam {
        min: 0.5,
        max: 5.0,
        step: 0.1,
        default: 2.0,
    };

    /// Rejects ranges a slider cannot represent.
    pub fn validate(&self) -> Result<(), RangeError> {
        let (min, max) = (self.min, self.max);
        if !(min <= max) {
            return Err(RangeError::Inverted { min, max });
        }
        if !(self.step > 0.0) {
            return Err(RangeError::Step(self.step));
        }
        if !(min..=max).contains(&self.default) {
            return Err(RangeError::DefaultOutside {
                default: self.default,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Never panics, even for a range that fails [`RangeParam::validate`].
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Parse a slider's text value. Unparsable or non-finite readings yield `None`.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| self.clamp(v))
    }
}
