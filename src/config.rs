//! Pricing constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Calibration constants of the price formula.
///
/// Missing fields take their defaults when deserializing, so a config file
/// only needs to name the constants it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Margin added to both sides of the bounding rectangle, in inches.
    pub padding: f64,
    /// Material price in dollars per square inch.
    pub material_cost: f64,
    /// Laser travel speed on straight cuts, in inches per second.
    pub laser_speed: f64,
    /// Machine time price in dollars per second.
    pub time_cost: f64,
    /// Fixed price added to every curve, in dollars.
    pub setup_cost: f64,
    /// Slow the laser down on arcs by `exp(-1 / radius)`.
    pub arc_speed_falloff: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            padding: 0.1,
            material_cost: 0.75,
            laser_speed: 0.5,
            time_cost: 0.07,
            setup_cost: 0.0,
            arc_speed_falloff: true,
        }
    }
}

impl PricingConfig {
    /// Checks that every constant is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::OutOfRange` if the laser speed is not positive
    /// or a cost or the padding is negative. Non-finite values are rejected
    /// too.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.laser_speed.is_finite() && self.laser_speed > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "laser_speed",
                requirement: "positive",
                value: self.laser_speed,
            });
        }
        for (field, value) in [
            ("padding", self.padding),
            ("material_cost", self.material_cost),
            ("time_cost", self.time_cost),
            ("setup_cost", self.setup_cost),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange {
                    field,
                    requirement: "non-negative",
                    value,
                });
            }
        }
        Ok(())
    }

    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed JSON and
    /// `ConfigError::OutOfRange` on unusable constants.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, otherwise as
    /// [`PricingConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
