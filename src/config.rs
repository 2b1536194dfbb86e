//! Page-supplied configuration.
//!
//! The canvas element may carry a `data-config` attribute holding a JSON
//! object. Any field left out keeps its default, so `{}` and a missing
//! attribute behave the same.
//!
//! ```json
//! { "breakpoint": 900, "colors": ["#ff0000", "#00ff00", "#0000ff"], "pattern": "Swirl Orbs" }
//! ```

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::layout::MOBILE_BREAKPOINT;
use crate::overlay::DEFAULT_HINT;
use crate::param::RangeParam;
use crate::pattern::PatternMode;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport width below which the mobile layout is used.
    pub breakpoint: f64,
    /// Initial values of the three color pickers.
    pub colors: [Rgba; 3],
    pub size: RangeParam,
    pub speed: RangeParam,
    pub pattern: PatternMode,
    pub hint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT,
            colors: [
                Rgba::rgb(0xff, 0x00, 0xff),
                Rgba::rgb(0x00, 0xff, 0xff),
                Rgba::rgb(0xff, 0xff, 0x00),
            ],
            size: RangeParam::SIZE,
            speed: RangeParam::SPEED,
            pattern: PatternMode::default(),
            hint: DEFAULT_HINT.to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, param) in [("size", &self.size), ("speed", &self.speed)] {
            param
                .validate()
                .map_err(|source| Error::InvalidRange { name, source })?;
        }
        Ok(())
    }
}
