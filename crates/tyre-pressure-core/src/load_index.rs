//! Load Index Table
//!
//! Standard passenger tyre load indices 90–125 and the maximum load each one
//! is rated to carry, in kilograms.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Load index → maximum load capacity (kg), ascending by index
pub const LOAD_INDEX_TABLE: [(u8, f64); 36] = [
    (90, 600.0),
    (91, 615.0),
    (92, 630.0),
    (93, 650.0),
    (94, 670.0),
    (95, 690.0),
    (96, 710.0),
    (97, 730.0),
    (98, 750.0),
    (99, 775.0),
    (100, 800.0),
    (101, 825.0),
    (102, 850.0),
    (103, 875.0),
    (104, 900.0),
    (105, 925.0),
    (106, 950.0),
    (107, 975.0),
    (108, 1000.0),
    (109, 1030.0),
    (110, 1060.0),
    (111, 1090.0),
    (112, 1120.0),
    (113, 1150.0),
    (114, 1180.0),
    (115, 1215.0),
    (116, 1250.0),
    (117, 1285.0),
    (118, 1320.0),
    (119, 1360.0),
    (120, 1400.0),
    (121, 1450.0),
    (122, 1500.0),
    (123, 1550.0),
    (124, 1600.0),
    (125, 1650.0),
];

/// Lowest index in the table
pub const MIN_LOAD_INDEX: u8 = 90;

/// Highest index in the table
pub const MAX_LOAD_INDEX: u8 = 125;

/// Raw lookup of the maximum load capacity (kg) for a load index
pub fn max_load_capacity(index: u8) -> Option<f64> {
    // Table is contiguous, so the key maps straight to a slot
    let slot = index.checked_sub(MIN_LOAD_INDEX)? as usize;
    LOAD_INDEX_TABLE.get(slot).map(|&(_, kg)| kg)
}

/// Load index outside the table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown load index {0} (expected 90-125)")]
pub struct UnknownLoadIndex(pub u8);

/// A load index known to be in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LoadIndex(u8);

impl LoadIndex {
    /// The load index preselected on a blank form
    pub const DEFAULT: LoadIndex = LoadIndex(91);

    /// Numeric index as printed on the sidewall
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Maximum rated load per tyre (kg)
    pub fn max_load_kg(&self) -> f64 {
        LOAD_INDEX_TABLE[(self.0 - MIN_LOAD_INDEX) as usize].1
    }

    /// Every load index in ascending order
    pub fn all() -> impl Iterator<Item = LoadIndex> {
        LOAD_INDEX_TABLE.iter().map(|&(code, _)| LoadIndex(code))
    }
}

impl Default for LoadIndex {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for LoadIndex {
    type Error = UnknownLoadIndex;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if (MIN_LOAD_INDEX..=MAX_LOAD_INDEX).contains(&code) {
            Ok(LoadIndex(code))
        } else {
            Err(UnknownLoadIndex(code))
        }
    }
}

impl From<LoadIndex> for u8 {
    fn from(index: LoadIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for LoadIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_contiguous() {
        for (slot, &(code, _)) in LOAD_INDEX_TABLE.iter().enumerate() {
            assert_eq!(code as usize, MIN_LOAD_INDEX as usize + slot);
        }
    }

    #[test]
    fn test_lookup_bounds() {
        assert_eq!(max_load_capacity(90), Some(600.0));
        assert_eq!(max_load_capacity(125), Some(1650.0));
        assert_eq!(max_load_capacity(89), None);
        assert_eq!(max_load_capacity(126), None);
        assert_eq!(max_load_capacity(0), None);
    }
}
