//! Tests for vehicle profile loading and validation

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use tyre_pressure_core::config::{ConfigError, VehicleProfile};
use tyre_pressure_core::distribution::VehicleCategory;
use tyre_pressure_core::unit_conversion::{Pressure, PressureUnit};

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("profile.json");

    let mut profile = VehicleProfile::default();
    profile.category = VehicleCategory::Trailer;
    profile.kerb_weight_kg = 750.0;
    profile.max_weight_kg = 1300.0;
    profile.unit = PressureUnit::Psi;
    profile.rear_reference = Pressure::psi(44.0);
    profile.tyre_size = Some("185/65 R14".parse().unwrap());

    profile.save(&path).unwrap();
    let loaded = VehicleProfile::load(&path).unwrap();

    assert_eq!(loaded, profile);
}

#[test]
fn test_partial_profile_uses_defaults() {
    let profile = VehicleProfile::from_json(r#"{ "category": "trailer", "load_index": 100 }"#)
        .unwrap();

    assert_eq!(profile.category, VehicleCategory::Trailer);
    assert_eq!(profile.load_index.max_load_kg(), 800.0);
    assert_eq!(profile.kerb_weight_kg, 1088.0);
    assert_eq!(profile.max_weight_kg, 1639.0);
    assert_eq!(profile.front_reference, Pressure::bar(2.0));
    assert_eq!(profile.rear_reference, Pressure::bar(2.2));
    assert_eq!(profile.effective_rear_percent(), 50.0);
}

#[test]
fn test_reference_pressure_in_psi() {
    let profile = VehicleProfile::from_json(
        r#"{ "rear_reference": { "value": 44.0, "unit": "psi" }, "unit": "psi" }"#,
    )
    .unwrap();

    assert_eq!(profile.rear_reference, Pressure::psi(44.0));
    assert_eq!(profile.unit, PressureUnit::Psi);
}

#[test]
fn test_kerb_above_max_is_rejected() {
    let result = VehicleProfile::from_json(r#"{ "kerb_weight_kg": 2000, "max_weight_kg": 1500 }"#);
    assert!(matches!(
        result,
        Err(ConfigError::WeightRange {
            kerb_kg,
            max_kg
        }) if kerb_kg == 2000.0 && max_kg == 1500.0
    ));
}

#[test]
fn test_bad_values_are_rejected() {
    let cases = [
        r#"{ "rear_percent": 120 }"#,
        r#"{ "rear_percent": -5 }"#,
        r#"{ "kerb_weight_kg": 0 }"#,
        r#"{ "max_load_kg": 0 }"#,
        r#"{ "max_load_kg": -615 }"#,
        r#"{ "front_reference": { "value": -1.0, "unit": "bar" } }"#,
    ];

    for json in cases {
        let result = VehicleProfile::from_json(json);
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { .. })),
            "expected invalid value for {}",
            json
        );
    }
}

#[test]
fn test_unknown_load_index_is_parse_error() {
    let result = VehicleProfile::from_json(r#"{ "load_index": 60 }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = VehicleProfile::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    VehicleProfile::default().save(&path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["category"], "car");
    assert_eq!(json["load_index"], 91);
    assert_eq!(json["tyre_size"], "195/55 R15");
    assert_eq!(json["rear_reference"]["unit"], "bar");
}

#[test]
fn test_direct_capacity_takes_precedence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trailer.json");
    fs::write(
        &path,
        r#"{ "category": "trailer", "load_index": 100, "max_load_kg": 450 }"#,
    )
    .unwrap();

    let profile = VehicleProfile::load(&path).unwrap();
    assert_eq!(profile.load_index.max_load_kg(), 800.0);
    assert_eq!(profile.capacity_kg(), 450.0);
    assert_eq!(profile.capacity_load_index(), None);

    profile.save(&path).unwrap();
    assert_eq!(VehicleProfile::load(&path).unwrap(), profile);
}

#[test]
fn test_weight_range_check() {
    let profile = VehicleProfile::from_json(
        r#"{ "kerb_weight_kg": 500, "max_weight_kg": 10000 }"#,
    )
    .unwrap();

    assert!(profile.check_weight(4000.0).is_ok());
    assert!(matches!(
        profile.check_weight(12000.0),
        Err(ConfigError::WeightOutOfRange { max_kg, .. }) if max_kg == 10000.0
    ));
}
