//! Tyre Size Designation
//!
//! Parses metric sizes written on the sidewall, e.g. `195/55 R15`:
//! - section width in mm (`195`)
//! - aspect ratio as a percentage of width (`55`)
//! - optional construction code (`R`, `ZR`, `D`, `B`)
//! - rim diameter in inches (`15`)
//!
//! The size is informational only; it does not enter the pressure formula.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors from parsing a tyre size
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TyreSizeError {
    /// Nothing but whitespace was given
    #[error("Tyre size is empty")]
    Empty,

    /// Input does not look like `<width>/<aspect> <construction><rim>`
    #[error("Invalid tyre size '{0}' (expected e.g. 195/55 R15)")]
    Malformed(String),

    /// Shape is right but a number is out of range
    #[error("Invalid value for '{field}' in tyre size: {message}")]
    InvalidValue {
        /// Offending component
        field: String,
        /// What is wrong with it
        message: String,
    },
}

fn size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d{3})\s*/\s*(\d{2,3})\s*(ZR|R|D|B)?\s*(\d{2}(?:\.\d)?)\s*$")
            .expect("tyre size pattern is valid")
    })
}

/// A parsed tyre size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TyreSize {
    /// Section width (mm)
    pub width_mm: u16,
    /// Sidewall height as a percentage of the width
    pub aspect_ratio: u16,
    /// Construction code (`R`, `ZR`, `D`, `B`), uppercased
    pub construction: Option<String>,
    /// Rim diameter (inches)
    pub rim_inches: f64,
}

impl TyreSize {
    /// Sidewall height (mm)
    pub fn sidewall_mm(&self) -> f64 {
        self.width_mm as f64 * self.aspect_ratio as f64 / 100.0
    }

    /// Overall diameter (mm), rim plus two sidewalls
    pub fn overall_diameter_mm(&self) -> f64 {
        self.rim_inches * 25.4 + 2.0 * self.sidewall_mm()
    }
}

impl FromStr for TyreSize {
    type Err = TyreSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TyreSizeError::Empty);
        }

        let caps = size_pattern()
            .captures(s)
            .ok_or_else(|| TyreSizeError::Malformed(s.to_string()))?;

        let width_mm: u16 = caps[1].parse().map_err(|e| TyreSizeError::InvalidValue {
            field: "width".to_string(),
            message: format!("{}", e),
        })?;
        let aspect_ratio: u16 = caps[2].parse().map_err(|e| TyreSizeError::InvalidValue {
            field: "aspect ratio".to_string(),
            message: format!("{}", e),
        })?;
        let rim_inches: f64 = caps[4].parse().map_err(|e| TyreSizeError::InvalidValue {
            field: "rim".to_string(),
            message: format!("{}", e),
        })?;

        if aspect_ratio == 0 || aspect_ratio > 100 {
            return Err(TyreSizeError::InvalidValue {
                field: "aspect ratio".to_string(),
                message: format!("{} is not a percentage", aspect_ratio),
            });
        }

        Ok(TyreSize {
            width_mm,
            aspect_ratio,
            construction: caps.get(3).map(|m| m.as_str().to_uppercase()),
            rim_inches,
        })
    }
}

impl TryFrom<String> for TyreSize {
    type Error = TyreSizeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TyreSize> for String {
    fn from(size: TyreSize) -> String {
        size.to_string()
    }
}

impl fmt::Display for TyreSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ", self.width_mm, self.aspect_ratio)?;
        if let Some(code) = &self.construction {
            f.write_str(code)?;
        }
        write!(f, "{}", self.rim_inches)
    }
}
