//! Service type - how the cargo is booked

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service type of a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceType {
    /// Full container load
    #[serde(rename = "FCL")]
    Fcl,

    /// Less-than container load
    #[serde(rename = "LCL")]
    Lcl,

    /// Air freight service
    #[serde(rename = "AIR")]
    Air,

    /// Service could not be determined
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl ServiceType {
    /// Get the service name as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Fcl => "FCL",
            ServiceType::Lcl => "LCL",
            ServiceType::Air => "AIR",
            ServiceType::Unknown => "unknown",
        }
    }

    /// Parse a service type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fcl" => Some(ServiceType::Fcl),
            "lcl" => Some(ServiceType::Lcl),
            "air" => Some(ServiceType::Air),
            "unknown" => Some(ServiceType::Unknown),
            _ => None,
        }
    }

    /// Container-based ocean services (FCL or LCL)
    pub fn is_containerized(&self) -> bool {
        matches!(self, ServiceType::Fcl | ServiceType::Lcl)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid service type: {}", s))
    }
}
