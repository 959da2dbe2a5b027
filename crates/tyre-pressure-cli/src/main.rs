//! Tyre Pressure Estimator
//!
//! Command-line form: fill in the vehicle and tyre fields as flags, read back
//! the estimated front and rear pressures.
//!
//! Usage:
//!   tyre-pressure [--vehicle car|trailer] [--weight KG] [--rear-percent P]
//!                 [--load-index N | --max-load KG] [--unit bar|psi] [--json]
//!   tyre-pressure load-indices
//!   tyre-pressure save-profile [PATH]

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tyre_pressure_core::prelude::{Calculator, LoadIndex, VehicleProfile};

mod cli;

use cli::{Cli, Commands};

#[derive(Serialize)]
struct LoadIndexRow {
    load_index: u8,
    max_load_kg: f64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        None | Some(Commands::Estimate) => estimate(&cli),
        Some(Commands::LoadIndices) => list_load_indices(cli.json),
        Some(Commands::SaveProfile { path }) => save_profile(&cli, path.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Profile from --config, else the default location if present, else defaults
fn load_profile(path: Option<&Path>) -> Result<VehicleProfile> {
    if let Some(path) = path {
        return VehicleProfile::load(path)
            .with_context(|| format!("Failed to load profile {}", path.display()));
    }

    match VehicleProfile::default_path() {
        Ok(path) if path.exists() => VehicleProfile::load(&path)
            .with_context(|| format!("Failed to load profile {}", path.display())),
        _ => Ok(VehicleProfile::default()),
    }
}

fn form_profile(cli: &Cli) -> Result<VehicleProfile> {
    let mut profile = load_profile(cli.config.as_deref())?;
    cli.form.apply(&mut profile);
    profile.validate().context("Invalid vehicle profile")?;
    Ok(profile)
}

fn estimate(cli: &Cli) -> Result<()> {
    let profile = form_profile(cli)?;
    let weight_kg = cli.form.weight.unwrap_or(profile.kerb_weight_kg);

    let calculator = Calculator::new(profile)?;
    let report = calculator.calculate(weight_kg).context(
        "Invalid --weight; use --kerb-weight/--max-weight to change the allowed range",
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn list_load_indices(json: bool) -> Result<()> {
    let rows: Vec<LoadIndexRow> = LoadIndex::all()
        .map(|index| LoadIndexRow {
            load_index: index.code(),
            max_load_kg: index.max_load_kg(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{:>3}  {:>6.0} kg", row.load_index, row.max_load_kg);
        }
    }
    Ok(())
}

fn save_profile(cli: &Cli, path: Option<&Path>) -> Result<()> {
    let profile = form_profile(cli)?;
    let destination: PathBuf = match path.or(cli.config.as_deref()) {
        Some(path) => path.to_path_buf(),
        None => VehicleProfile::default_path()?,
    };

    profile
        .save(&destination)
        .with_context(|| format!("Failed to write profile {}", destination.display()))?;
    println!("Saved profile to {}", destination.display());
    Ok(())
}
