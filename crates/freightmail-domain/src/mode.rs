//! Transport mode - how the cargo physically moves

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport mode of a shipment
///
/// Detected from keywords in the request text:
/// - Ocean: container and sea freight vocabulary
/// - Air: air freight vocabulary
/// - Ground: truck and road vocabulary
/// - Unknown: nothing recognizable was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Sea freight (FCL, LCL, ocean)
    Ocean,

    /// Air freight
    Air,

    /// Road freight (FTL, LTL, truck)
    Ground,

    /// Mode could not be determined
    #[default]
    Unknown,
}

impl TransportMode {
    /// Get the mode name as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Ocean => "ocean",
            TransportMode::Air => "air",
            TransportMode::Ground => "ground",
            TransportMode::Unknown => "unknown",
        }
    }

    /// Parse a mode from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ocean" => Some(TransportMode::Ocean),
            "air" => Some(TransportMode::Air),
            "ground" => Some(TransportMode::Ground),
            "unknown" => Some(TransportMode::Unknown),
            _ => None,
        }
    }

    /// Whether a mode was actually detected
    pub fn is_known(&self) -> bool {
        !matches!(self, TransportMode::Unknown)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid transport mode: {}", s))
    }
}
