//! Completeness rule taxonomy
//!
//! The rendered messages are part of the output contract and are matched
//! verbatim downstream. Do not reword them.

use std::fmt;

/// Problems that block a shipment from being quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockingIssue {
    /// Origin city or country missing
    OriginIncomplete,
    /// Destination city or country missing
    DestinationIncomplete,
    /// Transport mode is unknown
    ModeUnknown,
    /// No shipper found
    ShipperMissing,
}

impl fmt::Display for BlockingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BlockingIssue::OriginIncomplete => "Origin location is missing or incomplete",
            BlockingIssue::DestinationIncomplete => "Destination location is missing or incomplete",
            BlockingIssue::ModeUnknown => "Transport mode could not be determined",
            BlockingIssue::ShipperMissing => "Shipper information is missing",
        };
        f.write_str(msg)
    }
}

/// Problems worth flagging that do not block a quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Incoterm is unknown
    IncotermUnknown,
    /// Ready date is `"unknown"` or a relative phrase; carries the value as written
    ReadyDateRelative(String),
    /// No commodity description
    CommodityMissing,
    /// No consignee
    ConsigneeMissing,
    /// No gross weight
    GrossWeightMissing,
    /// No volume
    VolumeMissing,
    /// FCL/LCL service without any container line
    ContainersMissing,
    /// Service type is unknown
    ServiceUnknown,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::IncotermUnknown => {
                f.write_str("Incoterm could not be determined or is not standard")
            }
            Advisory::ReadyDateRelative(value) => {
                write!(f, "Ready date is relative or unknown: \"{}\"", value)
            }
            Advisory::CommodityMissing => f.write_str("Commodity description is missing"),
            Advisory::ConsigneeMissing => f.write_str("Consignee information is missing"),
            Advisory::GrossWeightMissing => f.write_str("Gross weight information is missing"),
            Advisory::VolumeMissing => f.write_str("Volume information is missing"),
            Advisory::ContainersMissing => {
                f.write_str("Container information is missing for ocean shipment")
            }
            Advisory::ServiceUnknown => f.write_str("Service type could not be determined"),
        }
    }
}
