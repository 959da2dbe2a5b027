//! Load Distribution
//!
//! Splits a total vehicle weight across the axles and then across the tyres
//! on each axle. Everything here is plain arithmetic and cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tyres on each axle (single-wheel axles only)
pub const TYRES_PER_AXLE: u32 = 2;

/// Which axle a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axle {
    /// Steering axle
    Front,
    /// Driven or trailer axle
    Rear,
}

impl Axle {
    /// Capitalised name used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            Axle::Front => "Front",
            Axle::Rear => "Rear",
        }
    }
}

/// Kind of vehicle being loaded
///
/// A trailer or caravan runs on a single axle, so it has no front tyre set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Two axles, front and rear tyre sets
    #[default]
    Car,
    /// Single axle, rear tyre set only
    Trailer,
}

impl VehicleCategory {
    /// Whether the vehicle has a front axle tyre set
    pub fn has_front_axle(&self) -> bool {
        matches!(self, VehicleCategory::Car)
    }

    /// Rear-axle share (%) preselected for this category
    pub fn default_rear_percent(&self) -> f64 {
        match self {
            VehicleCategory::Car => 60.0,
            VehicleCategory::Trailer => 50.0,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleCategory::Car => write!(f, "Car"),
            VehicleCategory::Trailer => write!(f, "Trailer/Caravan"),
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleCategory::Car),
            "trailer" | "caravan" | "trailer/caravan" => Ok(VehicleCategory::Trailer),
            other => Err(format!("Unknown vehicle category: {}", other)),
        }
    }
}

/// Weight carried by each axle (kg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleLoads {
    /// Rear axle
    pub rear_kg: f64,
    /// Front axle
    pub front_kg: f64,
}

impl AxleLoads {
    /// Per-tyre loads `(rear, front)` for the given tyre count per axle
    pub fn per_tyre(&self, tyres_per_axle: u32) -> (f64, f64) {
        let count = tyres_per_axle as f64;
        (self.rear_kg / count, self.front_kg / count)
    }
}

/// Weight carried by each tyre (kg)
///
/// `front_kg` is `None` when the vehicle has no front tyre set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TyreLoads {
    /// Each rear tyre
    pub rear_kg: f64,
    /// Each front tyre
    pub front_kg: Option<f64>,
}

impl TyreLoads {
    /// Load per tyre on `axle`, if the vehicle has that axle
    pub fn get(&self, axle: Axle) -> Option<f64> {
        match axle {
            Axle::Rear => Some(self.rear_kg),
            Axle::Front => self.front_kg,
        }
    }
}

/// Split a total weight into rear and front axle loads
///
/// `rear_percent` is the share on the rear axle, 0–100. The front axle takes
/// the remainder.
pub fn split_axles(total_weight_kg: f64, rear_percent: f64) -> AxleLoads {
    let rear_kg = (rear_percent / 100.0) * total_weight_kg;
    AxleLoads {
        rear_kg,
        front_kg: total_weight_kg - rear_kg,
    }
}

/// Per-tyre loads for a two-axle vehicle
///
/// `rear_fraction` is the rear share as a fraction (0.0–1.0).
pub fn distribute_load(total_weight_kg: f64, rear_fraction: f64, tyres_per_axle: u32) -> TyreLoads {
    let axles = split_axles(total_weight_kg, rear_fraction * 100.0);
    let (rear_kg, front_kg) = axles.per_tyre(tyres_per_axle);
    TyreLoads {
        rear_kg,
        front_kg: Some(front_kg),
    }
}

/// Per-tyre loads for a vehicle category, using [`TYRES_PER_AXLE`]
pub fn distribute_for(category: VehicleCategory, total_weight_kg: f64, rear_percent: f64) -> TyreLoads {
    let axles = split_axles(total_weight_kg, rear_percent);
    let (rear_kg, front_kg) = axles.per_tyre(TYRES_PER_AXLE);

    tracing::debug!(
        "{} axle loads: rear {:.1} kg, front {:.1} kg",
        category,
        axles.rear_kg,
        axles.front_kg
    );

    TyreLoads {
        rear_kg,
        front_kg: category.has_front_axle().then_some(front_kg),
    }
}
