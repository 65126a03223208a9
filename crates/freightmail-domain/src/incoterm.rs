//! Incoterm - the buyer/seller responsibility split

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized Incoterms
///
/// Only the five terms common in forwarding requests are modelled; anything
/// else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Incoterm {
    /// Ex Works
    #[serde(rename = "EXW")]
    Exw,
    /// Free On Board
    #[serde(rename = "FOB")]
    Fob,
    /// Cost, Insurance and Freight
    #[serde(rename = "CIF")]
    Cif,
    /// Delivered At Place
    #[serde(rename = "DAP")]
    Dap,
    /// Delivered Duty Paid
    #[serde(rename = "DDP")]
    Ddp,
    /// Not found or not standard
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Incoterm {
    /// Detection priority: earlier terms win when several appear in a text
    pub const PRIORITY: [Incoterm; 5] = [
        Incoterm::Exw,
        Incoterm::Fob,
        Incoterm::Cif,
        Incoterm::Dap,
        Incoterm::Ddp,
    ];

    /// Get the incoterm code as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fob => "FOB",
            Incoterm::Cif => "CIF",
            Incoterm::Dap => "DAP",
            Incoterm::Ddp => "DDP",
            Incoterm::Unknown => "unknown",
        }
    }

    /// Parse an incoterm from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EXW" => Some(Incoterm::Exw),
            "FOB" => Some(Incoterm::Fob),
            "CIF" => Some(Incoterm::Cif),
            "DAP" => Some(Incoterm::Dap),
            "DDP" => Some(Incoterm::Ddp),
            "UNKNOWN" => Some(Incoterm::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Incoterm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid incoterm: {}", s))
    }
}
