use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tyre_pressure_core::prelude::{
    LoadIndex, Pressure, PressureUnit, TyreSize, VehicleCategory, VehicleProfile,
};

/// Accepted range for a directly entered tyre capacity (kg)
const MIN_MAX_LOAD_KG: f64 = 100.0;
const MAX_MAX_LOAD_KG: f64 = 2000.0;

#[derive(Parser, Debug)]
#[command(
    name = "tyre-pressure",
    version,
    about = "Estimate tyre pressures from vehicle load and tyre load index"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Vehicle profile (JSON); defaults to <config dir>/tyre-pressure/profile.json"
    )]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub form: FormArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate front and rear pressures (default)
    Estimate,
    /// List load indices and their rated loads
    LoadIndices,
    /// Write the profile, with any form flags applied, to a file
    SaveProfile {
        #[arg(help = "Destination; defaults to the --config path or the user config dir")]
        path: Option<PathBuf>,
    },
}

/// One flag per form field; each overrides the loaded profile
#[derive(Args, Debug)]
pub struct FormArgs {
    #[arg(long, global = true, value_enum)]
    pub vehicle: Option<VehicleArg>,
    #[arg(
        long,
        global = true,
        value_parser = parse_weight,
        help = "Vehicle weight to calculate (kg), within kerb to maximum weight; defaults to kerb weight"
    )]
    pub weight: Option<f64>,
    #[arg(long, global = true, value_parser = parse_weight, help = "Kerb weight (kg)")]
    pub kerb_weight: Option<f64>,
    #[arg(long, global = true, value_parser = parse_weight, help = "Maximum weight (kg)")]
    pub max_weight: Option<f64>,
    #[arg(long, global = true, value_parser = parse_percent, help = "Load distribution (% on rear axle)")]
    pub rear_percent: Option<f64>,
    #[arg(long, global = true, value_parser = parse_load_index, help = "Tyre load index (90-125)")]
    pub load_index: Option<LoadIndex>,
    #[arg(
        long,
        global = true,
        value_parser = parse_max_load,
        conflicts_with = "load_index",
        help = "Maximum load per tyre (kg, 100-2000), instead of a load index"
    )]
    pub max_load: Option<f64>,
    #[arg(long, global = true, value_enum, help = "Unit to show pressures in")]
    pub unit: Option<UnitArg>,
    #[arg(long, global = true, help = "Front reference pressure, in --reference-unit")]
    pub front_reference: Option<f64>,
    #[arg(long, global = true, help = "Rear reference pressure, in --reference-unit")]
    pub rear_reference: Option<f64>,
    #[arg(long, global = true, value_enum, default_value_t = UnitArg::Bar)]
    pub reference_unit: UnitArg,
    #[arg(long, global = true, help = "Tyre size, e.g. \"195/55 R15\"")]
    pub tyre_size: Option<TyreSize>,
}

impl FormArgs {
    /// Overlay the flags that were given onto a profile
    pub fn apply(&self, profile: &mut VehicleProfile) {
        if let Some(vehicle) = self.vehicle {
            profile.category = vehicle.into();
        }
        if let Some(kerb) = self.kerb_weight {
            profile.kerb_weight_kg = kerb;
        }
        if let Some(max) = self.max_weight {
            profile.max_weight_kg = max;
        }
        if let Some(percent) = self.rear_percent {
            profile.rear_percent = Some(percent);
        }
        if let Some(index) = self.load_index {
            profile.load_index = index;
            profile.max_load_kg = None;
        }
        if let Some(capacity) = self.max_load {
            profile.max_load_kg = Some(capacity);
        }
        if let Some(unit) = self.unit {
            profile.unit = unit.into();
        }
        let reference_unit: PressureUnit = self.reference_unit.into();
        if let Some(value) = self.front_reference {
            profile.front_reference = Pressure::new(value, reference_unit);
        }
        if let Some(value) = self.rear_reference {
            profile.rear_reference = Pressure::new(value, reference_unit);
        }
        if let Some(size) = &self.tyre_size {
            profile.tyre_size = Some(size.clone());
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VehicleArg {
    Car,
    Trailer,
}

impl From<VehicleArg> for VehicleCategory {
    fn from(value: VehicleArg) -> Self {
        match value {
            VehicleArg::Car => VehicleCategory::Car,
            VehicleArg::Trailer => VehicleCategory::Trailer,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UnitArg {
    Bar,
    Psi,
}

impl From<UnitArg> for PressureUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Bar => PressureUnit::Bar,
            UnitArg::Psi => PressureUnit::Psi,
        }
    }
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0-100", value))
    }
}

fn parse_weight(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("weight must be a positive number of kg, got {}", s))
    }
}

fn parse_max_load(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_MAX_LOAD_KG..=MAX_MAX_LOAD_KG).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{} is outside {}-{} kg",
            s, MIN_MAX_LOAD_KG, MAX_MAX_LOAD_KG
        ))
    }
}

fn parse_load_index(s: &str) -> Result<LoadIndex, String> {
    let code: u8 = s.parse().map_err(|_| format!("'{}' is not a load index", s))?;
    LoadIndex::try_from(code).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_profile() {
        let cli = Cli::parse_from([
            "tyre-pressure",
            "--vehicle",
            "trailer",
            "--load-index",
            "100",
            "--rear-reference",
            "44",
            "--reference-unit",
            "psi",
            "--unit",
            "psi",
        ]);

        let mut profile = VehicleProfile::default();
        cli.form.apply(&mut profile);

        assert_eq!(profile.category, VehicleCategory::Trailer);
        assert_eq!(profile.load_index.max_load_kg(), 800.0);
        assert_eq!(profile.rear_reference, Pressure::psi(44.0));
        assert_eq!(profile.front_reference, Pressure::bar(2.0));
        assert_eq!(profile.unit, PressureUnit::Psi);
    }

    #[test]
    fn test_form_flags_after_subcommand() {
        let cli = Cli::parse_from(["tyre-pressure", "estimate", "--weight", "1200"]);
        assert!(matches!(cli.command, Some(Commands::Estimate)));
        assert_eq!(cli.form.weight, Some(1200.0));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["tyre-pressure", "--rear-percent", "140"]).is_err());
        assert!(Cli::try_parse_from(["tyre-pressure", "--load-index", "80"]).is_err());
        assert!(Cli::try_parse_from(["tyre-pressure", "--tyre-size", "huge"]).is_err());
        assert!(Cli::try_parse_from(["tyre-pressure", "--max-load", "50"]).is_err());
        assert!(Cli::try_parse_from(["tyre-pressure", "--max-load", "2500"]).is_err());
    }

    #[test]
    fn test_weight_must_be_finite_and_positive() {
        for bad in ["NaN", "inf", "-1200", "0", "heavy"] {
            assert!(parse_weight(bad).is_err(), "{} was accepted", bad);
            assert!(
                Cli::try_parse_from(["tyre-pressure", "--weight", bad]).is_err(),
                "--weight {} was accepted",
                bad
            );
        }
        assert!(Cli::try_parse_from(["tyre-pressure", "--kerb-weight", "NaN"]).is_err());
        assert!(Cli::try_parse_from(["tyre-pressure", "--max-weight", "NaN"]).is_err());
        assert_eq!(parse_weight("1200.5"), Ok(1200.5));
    }

    #[test]
    fn test_max_load_replaces_load_index() {
        let cli = Cli::parse_from(["tyre-pressure", "--max-load", "750"]);
        let mut profile = VehicleProfile::default();
        cli.form.apply(&mut profile);

        assert_eq!(profile.max_load_kg, Some(750.0));
        assert_eq!(profile.capacity_kg(), 750.0);
        assert_eq!(profile.capacity_load_index(), None);

        // A load index on the command line wins over a profile's direct capacity
        let cli = Cli::parse_from(["tyre-pressure", "--load-index", "100"]);
        cli.form.apply(&mut profile);
        assert_eq!(profile.max_load_kg, None);
        assert_eq!(profile.capacity_kg(), 800.0);

        assert!(
            Cli::try_parse_from(["tyre-pressure", "--max-load", "750", "--load-index", "95"])
                .is_err()
        );
    }
}
