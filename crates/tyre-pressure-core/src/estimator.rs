//! Pressure Estimator
//!
//! Required inflation pressure scales linearly with the load a tyre carries:
//! a tyre loaded to its rated capacity needs the full reference pressure, a
//! tyre carrying half of it needs half.

use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

use crate::unit_conversion::Pressure;

/// Tyre asked to carry more than its rated capacity
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[error("The load per tyre exceeds the tyre's maximum load capacity!")]
pub struct OverloadError {
    /// Load placed on the tyre (kg)
    pub load_kg: f64,
    /// Rated maximum load of the tyre (kg)
    pub capacity_kg: f64,
}

impl OverloadError {
    /// How far over capacity the tyre is (kg)
    pub fn excess_kg(&self) -> f64 {
        self.load_kg - self.capacity_kg
    }
}

/// Estimate the pressure needed to carry `load_per_tyre`
///
/// `max_load_capacity` must be positive. The result is in whatever unit
/// `reference_pressure` was given in. A load that does not compare as at
/// most the capacity, NaN included, is an overload.
pub fn estimate_pressure(
    load_per_tyre: f64,
    max_load_capacity: f64,
    reference_pressure: f64,
) -> Result<f64, OverloadError> {
    match load_per_tyre.partial_cmp(&max_load_capacity) {
        Some(Ordering::Less | Ordering::Equal) => {
            Ok(reference_pressure * (load_per_tyre / max_load_capacity))
        }
        _ => Err(OverloadError {
            load_kg: load_per_tyre,
            capacity_kg: max_load_capacity,
        }),
    }
}

/// [`estimate_pressure`] keeping the reference pressure's unit
pub fn estimate(
    load_per_tyre: f64,
    max_load_capacity: f64,
    reference: Pressure,
) -> Result<Pressure, OverloadError> {
    let value = estimate_pressure(load_per_tyre, max_load_capacity, reference.value)?;
    Ok(Pressure::new(value, reference.unit))
}
