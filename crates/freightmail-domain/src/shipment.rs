//! Shipment module - the extracted business content of a request

use crate::{Cargo, Incoterm, Location, ServiceType, TransportMode};
use serde::{Deserialize, Serialize};

/// Ready date value used when no date is found
pub const UNKNOWN_READY_DATE: &str = "unknown";

/// Shipper and consignee
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parties {
    /// Party sending the goods, empty if not found
    pub shipper: String,

    /// Party receiving the goods, empty if not found
    pub consignee: String,
}

/// A shipment as described by one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Transport mode
    pub mode: TransportMode,

    /// Service type
    pub service: ServiceType,

    /// Incoterm
    pub incoterm: Incoterm,

    /// Where the cargo starts
    pub origin: Location,

    /// Where the cargo ends up
    pub destination: Location,

    /// ISO date, a free-text phrase ("next week"), or `"unknown"`
    pub ready_date: String,

    /// Cargo details
    pub cargo: Cargo,

    /// Parties involved
    pub parties: Parties,
}

impl Shipment {
    /// Whether the ready date is the "not found" sentinel
    pub fn ready_date_unknown(&self) -> bool {
        self.ready_date == UNKNOWN_READY_DATE
    }
}

impl Default for Shipment {
    fn default() -> Self {
        Self {
            mode: TransportMode::Unknown,
            service: ServiceType::Unknown,
            incoterm: Incoterm::Unknown,
            origin: Location::empty(),
            destination: Location::empty(),
            ready_date: UNKNOWN_READY_DATE.to_string(),
            cargo: Cargo::default(),
            parties: Parties::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shipment_has_no_content() {
        let shipment = Shipment::default();
        assert_eq!(shipment.mode, TransportMode::Unknown);
        assert_eq!(shipment.service, ServiceType::Unknown);
        assert_eq!(shipment.incoterm, Incoterm::Unknown);
        assert!(shipment.origin.is_empty());
        assert!(shipment.ready_date_unknown());
    }

    #[test]
    fn test_shipment_json_keys() {
        let json = serde_json::to_value(Shipment::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "mode",
            "service",
            "incoterm",
            "origin",
            "destination",
            "ready_date",
            "cargo",
            "parties",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(json["origin"]["city"], "");
        assert_eq!(json["parties"]["consignee"], "");
    }
}
