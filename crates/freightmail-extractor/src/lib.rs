//! Freightmail Extractor
//!
//! Converts free-form freight-forwarding request text into a typed
//! [`ShipmentRecord`](freightmail_domain::ShipmentRecord).
//!
//! # Overview
//!
//! Extraction is pattern based. Each shipment field has its own stateless
//! extractor with an ordered list of text patterns; the first pattern that
//! matches wins. No extractor depends on another's output.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize → field extractors → assemble → ShipmentRecord → Gatekeeper
//! ```
//!
//! The subject line is read from the raw text; every other field from the
//! normalized text (unified line endings, trimmed).
//!
//! # Example Usage
//!
//! ```
//! use freightmail_extractor::assemble;
//! use freightmail_domain::{ServiceType, TransportMode};
//!
//! let text = "Subject: Export FCL\nPlease quote 1x40HC from San Jose, Costa Rica to Rotterdam, NL.";
//! let record = assemble(text, "request.txt");
//!
//! assert_eq!(record.shipment.mode, TransportMode::Ocean);
//! assert_eq!(record.shipment.service, ServiceType::Fcl);
//! assert_eq!(record.shipment.origin.city, "San Jose");
//! assert!(record.validation.errors.is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod fields;
mod normalize;
mod quantities;
mod route;


pub use config::{ExtractorConfig, ModeKeywords};
pub use error::ExtractorError;
pub use extractor::{assemble, Extractor};
pub use fields::{
    classify_mode, extract_commodity, extract_incoterm, extract_mode, extract_parties,
    extract_ready_date, extract_service, extract_subject, NO_SUBJECT,
};
pub use normalize::normalize;
pub use quantities::{extract_containers, extract_volume, extract_weight, parse_number};
pub use route::{extract_route, Route};
