//! Cargo details

use serde::{Deserialize, Serialize};

/// A quantity of containers of one type (e.g. `1x40HC`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Number of containers, always at least 1
    pub qty: u32,

    /// Normalized type token: digits plus optional letters ("40HC", "20")
    #[serde(rename = "type")]
    pub kind: String,
}

impl Container {
    /// Create a container entry
    pub fn new(qty: u32, kind: impl Into<String>) -> Self {
        Self {
            qty,
            kind: kind.into(),
        }
    }
}

/// What is being shipped
///
/// Numeric fields are `None` when absent, which is distinct from zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cargo {
    /// Commodity description, empty if not found
    pub commodity: String,

    /// Piece count (never populated by extraction)
    pub pieces: Option<u32>,

    /// Gross weight in kilograms
    pub gross_weight_kg: Option<f64>,

    /// Volume in cubic meters
    pub volume_cbm: Option<f64>,

    /// Containers in order of appearance
    pub containers: Vec<Container>,
}
