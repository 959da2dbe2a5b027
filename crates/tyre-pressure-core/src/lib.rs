//! # Tyre Pressure Core Library
//!
//! Estimates the inflation pressure a tyre needs for the load it carries.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Load-index lookup (index → rated load per tyre)
//! - Load distribution across axles and tyres
//! - Load-proportional pressure estimation with overload detection
//! - Bar ↔ PSI conversion
//! - Vehicle profiles (JSON) and tyre size parsing
//!
//! ## Example
//!
//! ```rust
//! use tyre_pressure_core::prelude::*;
//!
//! let mut profile = VehicleProfile::default();
//! profile.rear_percent = Some(50.0);
//!
//! let calculator = Calculator::new(profile).unwrap();
//! let report = calculator.calculate(1088.0).unwrap();
//!
//! let rear = report.rear.pressure.unwrap();
//! assert!((rear.value - 0.973).abs() < 0.001);
//! ```

pub mod calculator;
pub mod config;
pub mod distribution;
pub mod estimator;
pub mod load_index;
pub mod tyre_size;
pub mod unit_conversion;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calculator::{AxleReport, Calculator, PressureReport};
    pub use crate::config::{ConfigError, VehicleProfile};
    pub use crate::distribution::{
        distribute_for, distribute_load, split_axles, Axle, AxleLoads, TyreLoads,
        VehicleCategory, TYRES_PER_AXLE,
    };
    pub use crate::estimator::{estimate, estimate_pressure, OverloadError};
    pub use crate::load_index::{max_load_capacity, LoadIndex, UnknownLoadIndex};
    pub use crate::tyre_size::{TyreSize, TyreSizeError};
    pub use crate::unit_conversion::{bar_to_psi, psi_to_bar, Pressure, PressureUnit};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
