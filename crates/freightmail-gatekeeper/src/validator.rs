//! Shipment completeness validation

use crate::rules::{Advisory, BlockingIssue};
use crate::ValidationConfig;
use freightmail_domain::{Incoterm, ServiceType, Shipment, ShipmentRecord, Validation};
use tracing::debug;

/// Result of shipment validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Blocking issues, in rule order
    pub errors: Vec<BlockingIssue>,

    /// Non-blocking advisories, in rule order
    pub warnings: Vec<Advisory>,
}

/// Overall validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// No errors, no warnings
    Passed,

    /// No errors, at least one warning
    PassedWithWarnings,

    /// At least one blocking error
    Blocked,
}

impl ValidationResult {
    /// Overall status of this result
    pub fn status(&self) -> ValidationStatus {
        if !self.errors.is_empty() {
            ValidationStatus::Blocked
        } else if !self.warnings.is_empty() {
            ValidationStatus::PassedWithWarnings
        } else {
            ValidationStatus::Passed
        }
    }
}

impl From<ValidationResult> for Validation {
    fn from(result: ValidationResult) -> Self {
        Validation {
            errors: result.errors.iter().map(ToString::to_string).collect(),
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The Gatekeeper validates shipments before they are quoted
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a shipment against every rule
    ///
    /// All rules are checked independently; none short-circuits another.
    /// Calling this twice on the same shipment yields the same result.
    pub fn validate(&self, shipment: &Shipment) -> ValidationResult {
        let result = ValidationResult {
            errors: self.blocking_issues(shipment),
            warnings: self.advisories(shipment),
        };

        debug!(
            "Validation found {} error(s), {} warning(s)",
            result.errors.len(),
            result.warnings.len()
        );

        result
    }

    /// Validate the record's shipment and replace its validation findings
    pub fn apply(&self, record: &mut ShipmentRecord) -> ValidationStatus {
        let result = self.validate(&record.shipment);
        let status = result.status();
        record.apply_validation(result);
        status
    }

    fn blocking_issues(&self, shipment: &Shipment) -> Vec<BlockingIssue> {
        let checks = [
            (!shipment.origin.is_complete(), BlockingIssue::OriginIncomplete),
            (
                !shipment.destination.is_complete(),
                BlockingIssue::DestinationIncomplete,
            ),
            (!shipment.mode.is_known(), BlockingIssue::ModeUnknown),
            (
                shipment.parties.shipper.is_empty(),
                BlockingIssue::ShipperMissing,
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(failed, issue)| failed.then_some(issue))
            .collect()
    }

    fn advisories(&self, shipment: &Shipment) -> Vec<Advisory> {
        let cargo = &shipment.cargo;
        let ready_date_vague =
            shipment.ready_date_unknown() || self.config.is_relative_date(&shipment.ready_date);

        let checks = [
            (shipment.incoterm == Incoterm::Unknown, Advisory::IncotermUnknown),
            (
                ready_date_vague,
                Advisory::ReadyDateRelative(shipment.ready_date.clone()),
            ),
            (cargo.commodity.is_empty(), Advisory::CommodityMissing),
            (
                shipment.parties.consignee.is_empty(),
                Advisory::ConsigneeMissing,
            ),
            (cargo.gross_weight_kg.is_none(), Advisory::GrossWeightMissing),
            (cargo.volume_cbm.is_none(), Advisory::VolumeMissing),
            (
                shipment.service.is_containerized() && cargo.containers.is_empty(),
                Advisory::ContainersMissing,
            ),
            (shipment.service == ServiceType::Unknown, Advisory::ServiceUnknown),
        ];

        checks
            .into_iter()
            .filter_map(|(failed, advisory)| failed.then_some(advisory))
            .collect()
    }
}
