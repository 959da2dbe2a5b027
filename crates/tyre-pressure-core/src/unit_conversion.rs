//! Unit Conversion Functions
//!
//! Pressure conversion between Bar and PSI, plus a unit-tagged [`Pressure`]
//! value so results never travel without their unit.
//!
//! The conversion constant is the tyre-gauge figure of 0.0689476 bar per PSI
//! (1 bar ≈ 14.5038 PSI).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bar per PSI
pub const BAR_PER_PSI: f64 = 0.0689476;

/// Convert bar to PSI
pub fn bar_to_psi(bar: f64) -> f64 {
    bar / BAR_PER_PSI
}

/// Convert PSI to bar
pub fn psi_to_bar(psi: f64) -> f64 {
    psi * BAR_PER_PSI
}

/// Pressure unit selectable on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    /// Bar
    #[default]
    Bar,
    /// Pounds per square inch
    Psi,
}

impl PressureUnit {
    /// Display label, as printed after a value
    pub fn label(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "Bar",
            PressureUnit::Psi => "PSI",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognised pressure unit name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pressure unit '{0}' (expected 'bar' or 'psi')")]
pub struct UnknownPressureUnit(pub String);

impl FromStr for PressureUnit {
    type Err = UnknownPressureUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(PressureUnit::Bar),
            "psi" => Ok(PressureUnit::Psi),
            _ => Err(UnknownPressureUnit(s.to_string())),
        }
    }
}

/// Convert a pressure value between units
pub fn convert(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    match (from, to) {
        (PressureUnit::Bar, PressureUnit::Psi) => bar_to_psi(value),
        (PressureUnit::Psi, PressureUnit::Bar) => psi_to_bar(value),
        _ => value,
    }
}

/// A pressure value with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: PressureUnit,
}

impl Pressure {
    /// Pressure of `value` in `unit`
    pub fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }

    /// Pressure in Bar
    pub fn bar(value: f64) -> Self {
        Self::new(value, PressureUnit::Bar)
    }

    /// Pressure in PSI
    pub fn psi(value: f64) -> Self {
        Self::new(value, PressureUnit::Psi)
    }

    /// Re-express this pressure in another unit
    pub fn to_unit(self, unit: PressureUnit) -> Self {
        Self {
            value: convert(self.value, self.unit, unit),
            unit,
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}
