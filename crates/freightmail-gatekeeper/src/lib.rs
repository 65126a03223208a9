//! Freightmail Gatekeeper
//!
//! Checks extracted shipment records for completeness.
//!
//! The Gatekeeper provides:
//! - Blocking errors (route, mode, shipper) that stop a quote
//! - Non-blocking warnings for everything a quote could still be built without
//! - A plain-text summary of the findings
//!
//! Validation is a pure function of the shipment. The caller decides where
//! the result goes; [`Gatekeeper::apply`] is the common case of writing it
//! back onto the record.
//!
//! # Examples
//!
//! ```
//! use freightmail_domain::{ShipmentRecord, Shipment, Source};
//! use freightmail_gatekeeper::{summarize, Gatekeeper, ValidationStatus};
//!
//! let mut record = ShipmentRecord::new(Source::email("No subject", "empty.txt"), Shipment::default());
//! let gatekeeper = Gatekeeper::default_config();
//!
//! let result = gatekeeper.validate(&record.shipment);
//! assert_eq!(result.status(), ValidationStatus::Blocked);
//!
//! gatekeeper.apply(&mut record);
//! assert!(summarize(&record.validation).starts_with("4 Error(s):"));
//! ```

#![warn(missing_docs)]

mod config;
mod rules;
mod summary;
mod validator;

pub use config::ValidationConfig;
pub use rules::{Advisory, BlockingIssue};
pub use summary::{summarize, PASS_MESSAGE};
pub use validator::{Gatekeeper, ValidationResult, ValidationStatus};
