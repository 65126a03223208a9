//! Record assembly: runs every field extractor over one text

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fields::{
    classify_mode, extract_commodity, extract_incoterm, extract_parties, extract_ready_date,
    extract_service, extract_subject,
};
use crate::normalize::normalize;
use crate::quantities::{extract_containers, extract_volume, extract_weight};
use crate::route::extract_route;
use freightmail_domain::{Cargo, Shipment, ShipmentRecord, Source};
use tracing::{debug, info};

/// The Extractor converts free-form request text into a shipment record
///
/// Holds no per-call state, so one instance can serve any number of texts
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, rejecting an invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build a shipment record from raw text
    ///
    /// Never fails: every missing field degrades to its default. The returned
    /// record carries an empty validation container.
    pub fn assemble(&self, raw_text: &str, filename: &str) -> ShipmentRecord {
        let text = normalize(raw_text);

        let route = extract_route(&text);
        let shipment = Shipment {
            mode: classify_mode(&text, &self.config.mode_keywords),
            service: extract_service(&text),
            incoterm: extract_incoterm(&text),
            origin: route.origin,
            destination: route.destination,
            ready_date: extract_ready_date(&text),
            cargo: Cargo {
                commodity: extract_commodity(&text),
                pieces: None,
                gross_weight_kg: extract_weight(&text),
                volume_cbm: extract_volume(&text),
                containers: extract_containers(&text),
            },
            parties: extract_parties(&text),
        };

        debug!(
            "Extracted mode={} service={} incoterm={} containers={}",
            shipment.mode,
            shipment.service,
            shipment.incoterm,
            shipment.cargo.containers.len()
        );

        let record = ShipmentRecord::new(Source::email(extract_subject(raw_text), filename), shipment);

        info!(
            "Assembled record from '{}' ({} chars)",
            filename,
            raw_text.len()
        );

        record
    }
}

/// Build a shipment record with the default configuration
pub fn assemble(raw_text: &str, filename: &str) -> ShipmentRecord {
    Extractor::default().assemble(raw_text, filename)
}
