//! Freightmail Domain Layer
//!
//! This crate contains the data model shared by every other Freightmail crate.
//! It has no logic beyond small helpers and defines the shape of a shipment
//! record as it leaves the pipeline.
//!
//! ## Key Concepts
//!
//! - **ShipmentRecord**: The unit produced by extraction and completed by validation
//! - **Shipment**: Mode, service, incoterm, route, ready date, cargo and parties
//! - **Absence**: Enums fall back to an `Unknown` variant, strings to `""`,
//!   numbers to `None`. Nothing is ever null-by-accident.
//! - **Validation**: Ordered blocking errors and non-blocking warnings
//!
//! ## Serialization
//!
//! Every type serializes with the stable key names consumed downstream:
//!
//! ```text
//! source{channel,subject,received_text_file}
//! shipment{mode,service,incoterm,origin{city,country},destination{city,country},
//!          ready_date,cargo{commodity,pieces,gross_weight_kg,volume_cbm,
//!          containers[{qty,type}]},parties{shipper,consignee}}
//! validation{errors[],warnings[]}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cargo;
pub mod incoterm;
pub mod location;
pub mod mode;
pub mod record;
pub mod service;
pub mod shipment;

// Re-exports for convenience
pub use cargo::{Cargo, Container};
pub use incoterm::Incoterm;
pub use location::Location;
pub use mode::TransportMode;
pub use record::{ShipmentRecord, Source, Validation, EMAIL_CHANNEL};
pub use service::ServiceType;
pub use shipment::{Parties, Shipment, UNKNOWN_READY_DATE};
