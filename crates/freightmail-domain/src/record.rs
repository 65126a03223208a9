//! Record module - the unit produced by extraction and completed by validation

use crate::Shipment;
use serde::{Deserialize, Serialize};

/// Channel recorded for every text-derived record
pub const EMAIL_CHANNEL: &str = "email";

/// Where a record came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Intake channel, always `"email"`
    pub channel: String,

    /// Subject line, or `"No subject"`
    pub subject: String,

    /// Name of the text file the record was read from
    pub received_text_file: String,
}

impl Source {
    /// Create an email source
    pub fn email(subject: impl Into<String>, received_text_file: impl Into<String>) -> Self {
        Self {
            channel: EMAIL_CHANNEL.to_string(),
            subject: subject.into(),
            received_text_file: received_text_file.into(),
        }
    }
}

/// Completeness findings for a shipment
///
/// Both lists are replaced wholesale on every validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Validation {
    /// Blocking problems, in rule order
    pub errors: Vec<String>,

    /// Non-blocking problems, in rule order
    pub warnings: Vec<String>,
}

impl Validation {
    /// No errors and no warnings
    pub fn passed(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// At least one blocking error
    pub fn is_blocked(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A shipment record: source metadata, shipment content and validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Source metadata
    pub source: Source,

    /// Extracted shipment
    pub shipment: Shipment,

    /// Validation findings, empty until validated
    pub validation: Validation,
}

impl ShipmentRecord {
    /// Create a record with an empty validation container
    pub fn new(source: Source, shipment: Shipment) -> Self {
        Self {
            source,
            shipment,
            validation: Validation::default(),
        }
    }

    /// Replace the validation findings with a freshly computed set
    pub fn apply_validation(&mut self, validation: impl Into<Validation>) {
        self.validation = validation.into();
    }
}
