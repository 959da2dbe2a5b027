//! Calculator
//!
//! Runs one pass of the form: resolve the load index, spread the vehicle
//! weight over the tyres, estimate each axle's pressure and convert it to
//! the display unit. An overloaded axle yields a message instead of a
//! number, and the other axle is still reported. A weight outside the
//! profile's kerb-to-maximum range is an error, never silently adjusted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{ConfigError, VehicleProfile};
use crate::distribution::{distribute_for, Axle, VehicleCategory};
use crate::estimator::estimate;
use crate::load_index::LoadIndex;
use crate::tyre_size::TyreSize;
use crate::unit_conversion::{Pressure, PressureUnit};

/// Result for one axle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleReport {
    /// Axle this result is for
    pub axle: Axle,
    /// Load on each tyre of this axle (kg)
    pub tyre_load_kg: f64,
    /// Estimated pressure in the display unit; `None` when overloaded
    pub pressure: Option<Pressure>,
    /// Overload message; `None` when a pressure was estimated
    pub error: Option<String>,
}

impl AxleReport {
    /// Whether the tyre load exceeded capacity
    pub fn is_overloaded(&self) -> bool {
        self.error.is_some()
    }
}

/// Everything shown back to the user after one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureReport {
    /// Car or trailer/caravan
    pub category: VehicleCategory,
    /// Load index the capacity came from; `None` when entered directly
    pub load_index: Option<LoadIndex>,
    /// Rated maximum load per tyre (kg)
    pub max_load_kg: f64,
    /// Vehicle weight the loads were computed from (kg)
    pub vehicle_weight_kg: f64,
    /// Share of the weight on the rear axle (%)
    pub rear_percent: f64,
    /// Unit of every pressure in the report
    pub unit: PressureUnit,
    /// Tyre size, when known
    pub tyre_size: Option<TyreSize>,
    /// Rear axle result
    pub rear: AxleReport,
    /// Front axle result; `None` for vehicles without a front tyre set
    pub front: Option<AxleReport>,
}

impl PressureReport {
    /// Axle reports in display order (rear first)
    pub fn axles(&self) -> impl Iterator<Item = &AxleReport> {
        std::iter::once(&self.rear).chain(self.front.as_ref())
    }

    /// Whether any axle is overloaded
    pub fn any_overloaded(&self) -> bool {
        self.axles().any(AxleReport::is_overloaded)
    }
}

impl fmt::Display for PressureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(size) = &self.tyre_size {
            write!(f, "{} ", size)?;
        }
        match self.load_index {
            Some(index) => writeln!(
                f,
                "load index {} ({:.0} kg max per tyre)",
                index, self.max_load_kg
            )?,
            None => writeln!(f, "{:.0} kg max per tyre", self.max_load_kg)?,
        }
        writeln!(
            f,
            "{}: {:.0} kg, {:.0}% on rear axle",
            self.category, self.vehicle_weight_kg, self.rear_percent
        )?;

        writeln!(f, "Tyre Loads")?;
        for axle in self.axles() {
            writeln!(
                f,
                "{} Tyre Load: {:.2} kg per tyre",
                axle.axle.label(),
                axle.tyre_load_kg
            )?;
        }

        writeln!(f, "Estimated Tyre Pressures")?;
        for axle in self.axles() {
            match (&axle.pressure, &axle.error) {
                (_, Some(error)) => writeln!(f, "{} Tyre: {}", axle.axle.label(), error)?,
                (Some(pressure), None) => writeln!(
                    f,
                    "Estimated {} Tyre Pressure: {}",
                    axle.axle.label(),
                    pressure
                )?,
                (None, None) => {}
            }
        }
        Ok(())
    }
}

/// Estimates pressures for a validated vehicle profile
#[derive(Debug, Clone)]
pub struct Calculator {
    profile: VehicleProfile,
}

impl Calculator {
    /// Validate the profile and build a calculator for it
    pub fn new(profile: VehicleProfile) -> Result<Self, ConfigError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// Profile the calculator was built from
    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    /// Run the calculation for a vehicle weight (kg)
    ///
    /// Fails with [`ConfigError::WeightOutOfRange`] unless the weight lies in
    /// `[kerb_weight_kg, max_weight_kg]`.
    pub fn calculate(&self, weight_kg: f64) -> Result<PressureReport, ConfigError> {
        let profile = &self.profile;
        profile.check_weight(weight_kg)?;

        let max_load_kg = profile.capacity_kg();
        let rear_percent = profile.effective_rear_percent();

        let loads = distribute_for(profile.category, weight_kg, rear_percent);

        let rear = self.axle_report(Axle::Rear, loads.rear_kg, max_load_kg);
        let front = loads
            .front_kg
            .map(|load| self.axle_report(Axle::Front, load, max_load_kg));

        Ok(PressureReport {
            category: profile.category,
            load_index: profile.capacity_load_index(),
            max_load_kg,
            vehicle_weight_kg: weight_kg,
            rear_percent,
            unit: profile.unit,
            tyre_size: profile.tyre_size.clone(),
            rear,
            front,
        })
    }

    fn axle_report(&self, axle: Axle, tyre_load_kg: f64, max_load_kg: f64) -> AxleReport {
        match estimate(tyre_load_kg, max_load_kg, self.profile.reference_for(axle)) {
            Ok(pressure) => AxleReport {
                axle,
                tyre_load_kg,
                pressure: Some(pressure.to_unit(self.profile.unit)),
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    "{} tyre overloaded by {:.1} kg ({:.0} kg capacity)",
                    axle.label(),
                    e.excess_kg(),
                    max_load_kg
                );
                AxleReport {
                    axle,
                    tyre_load_kg,
                    pressure: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
