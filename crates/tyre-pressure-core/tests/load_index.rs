use tyre_pressure_core::load_index::{
    max_load_capacity, LoadIndex, UnknownLoadIndex, LOAD_INDEX_TABLE, MAX_LOAD_INDEX,
    MIN_LOAD_INDEX,
};

#[test]
fn test_known_capacities() {
    assert_eq!(max_load_capacity(91), Some(615.0));
    assert_eq!(max_load_capacity(100), Some(800.0));
    assert_eq!(max_load_capacity(109), Some(1030.0));
    assert_eq!(max_load_capacity(115), Some(1215.0));
}

#[test]
fn test_table_covers_90_to_125() {
    assert_eq!(LOAD_INDEX_TABLE.len(), 36);
    assert_eq!(LOAD_INDEX_TABLE.first(), Some(&(MIN_LOAD_INDEX, 600.0)));
    assert_eq!(LOAD_INDEX_TABLE.last(), Some(&(MAX_LOAD_INDEX, 1650.0)));
}

#[test]
fn test_capacity_rises_with_index() {
    let capacities: Vec<f64> = LoadIndex::all().map(|i| i.max_load_kg()).collect();
    assert!(capacities.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_typed_lookup_matches_raw_lookup() {
    for index in LoadIndex::all() {
        assert_eq!(max_load_capacity(index.code()), Some(index.max_load_kg()));
    }
}

#[test]
fn test_out_of_table_index_is_rejected() {
    assert_eq!(LoadIndex::try_from(89), Err(UnknownLoadIndex(89)));
    assert_eq!(LoadIndex::try_from(126), Err(UnknownLoadIndex(126)));
    assert_eq!(max_load_capacity(200), None);
}

#[test]
fn test_default_is_91() {
    assert_eq!(LoadIndex::default().code(), 91);
    assert_eq!(LoadIndex::default().max_load_kg(), 615.0);
}

#[test]
fn test_serde_rejects_unknown_index() {
    let index: LoadIndex = serde_json::from_str("104").unwrap();
    assert_eq!(index.max_load_kg(), 900.0);
    assert_eq!(serde_json::to_string(&index).unwrap(), "104");

    let err = serde_json::from_str::<LoadIndex>("42").unwrap_err();
    assert!(err.to_string().contains("Unknown load index 42"));
}
