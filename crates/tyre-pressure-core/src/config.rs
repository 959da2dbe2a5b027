//! Vehicle profile stored as profile.json
//!
//! Holds the defaults a blank form starts from. The reference pressures are
//! the vehicle maker's placard values for one particular tyre fitment and are
//! only examples: set them for the vehicle at hand.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::distribution::{Axle, VehicleCategory};
use crate::load_index::LoadIndex;
use crate::tyre_size::TyreSize;
use crate::unit_conversion::{Pressure, PressureUnit};

/// Errors from loading or validating a profile
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the profile file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The profile is not valid JSON for a [`VehicleProfile`]
    #[error("Profile parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Profile field name
        field: String,
        /// What is wrong with the value
        message: String,
    },

    /// Kerb weight is above maximum weight
    #[error("Kerb weight {kerb_kg} kg exceeds maximum weight {max_kg} kg")]
    WeightRange {
        /// Kerb weight (kg)
        kerb_kg: f64,
        /// Maximum weight (kg)
        max_kg: f64,
    },

    /// Requested vehicle weight is outside `[kerb, max]`
    #[error("Vehicle weight {weight_kg} kg is outside the {kerb_kg}-{max_kg} kg kerb-to-maximum range")]
    WeightOutOfRange {
        /// Requested weight (kg)
        weight_kg: f64,
        /// Kerb weight (kg)
        kerb_kg: f64,
        /// Maximum weight (kg)
        max_kg: f64,
    },

    /// No per-user configuration directory on this platform
    #[error("Could not find a configuration directory")]
    NoConfigDir,
}

/// A vehicle and tyre fitment to estimate pressures for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleProfile {
    /// Car or trailer/caravan
    pub category: VehicleCategory,

    /// Unladen weight (kg); lower bound for the weight input
    pub kerb_weight_kg: f64,

    /// Gross vehicle weight (kg); upper bound for the weight input
    pub max_weight_kg: f64,

    /// Rear-axle share (%); falls back to the category default when unset
    pub rear_percent: Option<f64>,

    /// Tyre load index; sets the capacity unless `max_load_kg` is given
    pub load_index: LoadIndex,

    /// Rated maximum load per tyre (kg), entered directly instead of a load index
    pub max_load_kg: Option<f64>,

    /// Placard pressure for the front tyres
    pub front_reference: Pressure,

    /// Placard pressure for the rear tyres
    pub rear_reference: Pressure,

    /// Unit results are shown in
    pub unit: PressureUnit,

    /// Tyre size designation, shown in the report
    pub tyre_size: Option<TyreSize>,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            category: VehicleCategory::Car,
            kerb_weight_kg: 1088.0,
            max_weight_kg: 1639.0,
            rear_percent: None,
            load_index: LoadIndex::DEFAULT,
            max_load_kg: None,
            front_reference: Pressure::bar(2.0),
            rear_reference: Pressure::bar(2.2),
            unit: PressureUnit::Bar,
            tyre_size: Some(TyreSize {
                width_mm: 195,
                aspect_ratio: 55,
                construction: Some("R".to_string()),
                rim_inches: 15.0,
            }),
        }
    }
}

impl VehicleProfile {
    /// Default profile location (`<config dir>/tyre-pressure/profile.json`)
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("tyre-pressure").join("profile.json"))
    }

    /// Parse and validate a profile from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let profile: VehicleProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let profile = Self::from_json(&content)?;
        tracing::debug!("Loaded vehicle profile from {}", path.display());
        Ok(profile)
    }

    /// Write the profile as pretty JSON, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Rear-axle share (%) to use when the form leaves it unset
    pub fn effective_rear_percent(&self) -> f64 {
        self.rear_percent
            .unwrap_or_else(|| self.category.default_rear_percent())
    }

    /// Reference pressure for an axle
    pub fn reference_for(&self, axle: Axle) -> Pressure {
        match axle {
            Axle::Front => self.front_reference,
            Axle::Rear => self.rear_reference,
        }
    }

    /// Rated maximum load per tyre (kg): the direct entry, else the load index's
    pub fn capacity_kg(&self) -> f64 {
        self.max_load_kg
            .unwrap_or_else(|| self.load_index.max_load_kg())
    }

    /// Load index behind the capacity, `None` when it was entered directly
    pub fn capacity_load_index(&self) -> Option<LoadIndex> {
        match self.max_load_kg {
            Some(_) => None,
            None => Some(self.load_index),
        }
    }

    /// Check a requested vehicle weight lies within `[kerb, max]`
    pub fn check_weight(&self, weight_kg: f64) -> Result<(), ConfigError> {
        // NaN is never contained
        if !(self.kerb_weight_kg..=self.max_weight_kg).contains(&weight_kg) {
            return Err(ConfigError::WeightOutOfRange {
                weight_kg,
                kerb_kg: self.kerb_weight_kg,
                max_kg: self.max_weight_kg,
            });
        }
        Ok(())
    }

    /// Check the profile is internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("kerb_weight_kg", self.kerb_weight_kg),
            ("max_weight_kg", self.max_weight_kg),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("weight must be positive, got {}", value),
                });
            }
        }

        if self.kerb_weight_kg > self.max_weight_kg {
            return Err(ConfigError::WeightRange {
                kerb_kg: self.kerb_weight_kg,
                max_kg: self.max_weight_kg,
            });
        }

        if let Some(capacity) = self.max_load_kg {
            if !(capacity.is_finite() && capacity > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: "max_load_kg".to_string(),
                    message: format!("capacity must be positive, got {}", capacity),
                });
            }
        }

        if let Some(percent) = self.rear_percent {
            if !(0.0..=100.0).contains(&percent) {
                return Err(ConfigError::InvalidValue {
                    field: "rear_percent".to_string(),
                    message: format!("{} is outside 0-100", percent),
                });
            }
        }

        for (field, reference) in [
            ("front_reference", self.front_reference),
            ("rear_reference", self.rear_reference),
        ] {
            if !(reference.value.is_finite() && reference.value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("pressure must not be negative, got {}", reference),
                });
            }
        }

        Ok(())
    }
}
